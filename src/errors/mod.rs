//! 에러 타입 모듈
//!
//! [`errors`] 모듈의 타입들을 재노출합니다.

pub mod errors;

pub use errors::*;
