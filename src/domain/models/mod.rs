//! 비영속 도메인 모델
//!
//! - [`auth`] - 인증된 사용자, OAuth 요청과 자격 증명
//! - [`password_strength`] - 비밀번호 강도 점수
//! - [`feedback`] - 알림(토스트)과 내비게이션 대상

pub mod auth;
pub mod password_strength;
pub mod feedback;

pub use auth::*;
pub use password_strength::*;
pub use feedback::*;
