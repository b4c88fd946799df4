//! DTO 모듈
//!
//! - [`request`] - HTTP 요청 본문/쿼리
//! - [`response`] - HTTP 응답 본문
//! - [`provider`] - 외부 아이덴티티 프로바이더/Google OAuth 응답 형식

pub mod request;
pub mod response;
pub mod provider;

pub use request::*;
pub use response::*;
