//! # Screen Controllers
//!
//! 회원가입 폼과 Google 로그인 컨트롤을 UI 없이 구동하는 컨트롤러입니다.
//! 컨트롤러는 폼 상태, 로딩 플래그, 결과를 소유하고 사용자 피드백은 포트로 내보냅니다.
//!
//! ## 구성
//!
//! - [`register`] - 회원가입 폼 ([`RegistrationForm`])
//! - [`google_sign_in`] - Google 로그인 컨트롤 ([`GoogleSignIn`])
//! - [`loading`] - 컨트롤별 로딩 플래그
//! - [`feedback`] - 알림/화면 이동 포트
//! - [`oauth`] - OAuth 팝업/리다이렉트 포트
//! - [`recorder`] - 피드백을 HTTP 응답으로 모으는 포트 구현
//!
//! ## 상태 전이
//!
//! ```text
//! idle ──submit──► in-flight ──┬──► success (알림, 이동)
//!                              └──► failure (알림)
//!      ◄──────── guard drop ───┘
//! ```

use std::sync::Arc;

use crate::repositories::ProfileStore;
use crate::services::auth::IdentityProvider;

pub mod feedback;
pub mod google_sign_in;
pub mod loading;
pub mod oauth;
pub mod recorder;
pub mod register;

#[cfg(test)]
pub mod test_support;

pub use feedback::{Feedback, Navigator, Notifier};
pub use google_sign_in::{GoogleSignIn, SignInOutcome};
pub use loading::{LoadingFlag, LoadingGuard};
pub use oauth::{OAuthPopup, RedirectSource};
pub use recorder::ScreenRecorder;
pub use register::{RegistrationFields, RegistrationForm, RegistrationOutcome};

/// 프로세스 전역 프로바이더 클라이언트 묶음
///
/// `main`에서 한 번 생성되어 모든 컨트롤러에 전달됩니다.
/// 컨트롤러는 클라이언트를 읽기 전용으로만 사용합니다.
#[derive(Clone)]
pub struct AuthClients {
    pub identity: Arc<dyn IdentityProvider>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AuthClients {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { identity, profiles }
    }
}
