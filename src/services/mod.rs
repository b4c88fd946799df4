//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 프로바이더와의 통신과 프로필 동기화 규칙을 담당합니다.
//! 모든 서비스는 `main`에서 명시적으로 생성되어 화면 컨트롤러와 핸들러에 전달됩니다.
//!
//! - [`auth`] - 아이덴티티 프로바이더 클라이언트, Google OAuth URL/State
//! - [`profiles`] - 베스트 에포트 프로필 문서 쓰기

pub mod auth;
pub mod profiles;
