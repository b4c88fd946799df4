//! # Domain Layer
//!
//! 화면 플로우가 주고받는 도메인 타입을 정의합니다.
//!
//! - [`entities`] - 문서 저장소에 영속되는 엔티티 (프로필 문서)
//! - [`models`] - 비영속 모델 (인증된 사용자, OAuth 요청, 비밀번호 강도, 알림/내비게이션)
//! - [`dto`] - HTTP 요청/응답 DTO

pub mod entities;
pub mod models;
pub mod dto;

pub use entities::*;
pub use models::*;
