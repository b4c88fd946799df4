//! # Google 로그인 컨트롤러
//!
//! 두 가지 진입점을 제공합니다.
//!
//! - **팝업** ([`GoogleSignIn::sign_in_with_popup`]): 기본 경로. 시도하는 동안만 로딩 플래그가 올라갑니다.
//! - **리다이렉트 결과** ([`GoogleSignIn::check_redirect_result`]): 컨트롤 마운트 시 한 번만 확인합니다.
//!   로딩 플래그는 건드리지 않습니다.
//!
//! 두 경로 모두 자격 증명을 얻은 뒤에는 같은 완료 처리(`complete_sign_in`)를 거칩니다.
//! 프로필 문서가 없을 때만 만들고, 성공 알림을 띄운 뒤 홈으로 이동합니다.
//!
//! 사용자가 팝업을 닫거나 요청이 취소된 경우에는 알림 없이 조용히 끝납니다.

use crate::domain::models::auth::{AuthenticatedUser, OAuthCredential, OAuthRequest};
use crate::domain::models::{Notification, Route};
use crate::errors::AuthError;
use crate::services::profiles::{ensure_profile, ProfileSync};

use super::{AuthClients, Feedback, LoadingFlag, OAuthPopup, RedirectSource};

pub const GOOGLE_SUCCESS_MESSAGE: &str = "Successfully signed in with Google!";
pub const GOOGLE_FAILED_MESSAGE: &str = "Google sign-in failed. Please try again.";

/// 로그인 시도 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    SignedIn {
        user: AuthenticatedUser,
        profile: ProfileSync,
    },
    /// 사용자가 취소함 (알림 없음)
    Cancelled,
    Failed { error: AuthError, message: String },
    /// 대기 중인 리다이렉트 결과 없음
    NoPendingResult,
    /// 이미 진행 중이거나 리다이렉트 확인을 이미 마쳐서 무시됨
    Ignored,
}

/// Google 로그인 컨트롤러
pub struct GoogleSignIn {
    clients: AuthClients,
    feedback: Feedback,
    request: OAuthRequest,
    loading: LoadingFlag,
    redirect_checked: bool,
}

impl GoogleSignIn {
    pub fn new(clients: AuthClients, feedback: Feedback) -> Self {
        Self {
            clients,
            feedback,
            request: OAuthRequest::google(),
            loading: LoadingFlag::new(),
            redirect_checked: false,
        }
    }

    pub fn request(&self) -> &OAuthRequest {
        &self.request
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// 팝업으로 로그인합니다.
    pub async fn sign_in_with_popup(&self, popup: &dyn OAuthPopup) -> SignInOutcome {
        let Some(_guard) = self.loading.try_begin() else {
            log::debug!("Google 로그인 무시: 이미 진행 중");
            return SignInOutcome::Ignored;
        };

        match popup.open(&self.request).await {
            Ok(credential) => self.complete_sign_in(credential).await,
            Err(error) => self.fail(error),
        }
    }

    /// 대기 중인 리다이렉트 결과를 확인합니다.
    ///
    /// 컨트롤 인스턴스마다 한 번만 실행되며, 두 번째 호출부터는 `Ignored`입니다.
    pub async fn check_redirect_result(&mut self, redirect: &dyn RedirectSource) -> SignInOutcome {
        if self.redirect_checked {
            return SignInOutcome::Ignored;
        }
        self.redirect_checked = true;

        match redirect.take_redirect_result().await {
            Ok(Some(credential)) => self.complete_sign_in(credential).await,
            Ok(None) => SignInOutcome::NoPendingResult,
            Err(error) => self.fail(error),
        }
    }

    async fn complete_sign_in(&self, credential: OAuthCredential) -> SignInOutcome {
        let user = match self.clients.identity.sign_in_with_credential(credential).await {
            Ok(user) => user,
            Err(error) => return self.fail(error),
        };
        log::info!("Google 로그인 성공: uid={}", user.uid);

        let profile = ensure_profile(self.clients.profiles.as_ref(), &user).await;

        self.feedback.notifier.notify(Notification::success(GOOGLE_SUCCESS_MESSAGE));
        self.feedback.navigator.navigate(Route::Home);

        SignInOutcome::SignedIn { user, profile }
    }

    fn fail(&self, error: AuthError) -> SignInOutcome {
        if error.is_cancellation() {
            log::info!("Google 로그인 취소됨 ({})", error.code());
            return SignInOutcome::Cancelled;
        }

        log::error!("Google 로그인 실패 ({}): {}", error.code(), error);

        let message = match error.to_string() {
            m if m.trim().is_empty() => GOOGLE_FAILED_MESSAGE.to_string(),
            m => m,
        };
        self.feedback.notifier.notify(Notification::error(message.clone()));

        SignInOutcome::Failed { error, message }
    }
}
