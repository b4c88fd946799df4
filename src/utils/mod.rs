//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 표시 이름 분리, 선택 문자열 정리

pub mod string_utils;
