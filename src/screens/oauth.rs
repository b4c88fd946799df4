//! OAuth 팝업/리다이렉트 포트
//!
//! 브라우저 팝업을 여는 일과 리다이렉트 결과를 꺼내는 일은 실행 환경에 따라 다르므로
//! 컨트롤러는 이 두 trait에만 의존합니다.

use async_trait::async_trait;

use crate::domain::models::auth::{OAuthCredential, OAuthRequest};
use crate::errors::AuthError;

/// OAuth 팝업 포트
#[async_trait]
pub trait OAuthPopup: Send + Sync {
    /// 팝업을 열고 사용자가 인증을 마칠 때까지 기다립니다.
    ///
    /// 사용자가 팝업을 닫으면 [`AuthError::PopupClosedByUser`],
    /// 다른 팝업 요청과 충돌하면 [`AuthError::CancelledPopupRequest`]를 돌려줍니다.
    async fn open(&self, request: &OAuthRequest) -> Result<OAuthCredential, AuthError>;
}

/// 리다이렉트 결과 포트
#[async_trait]
pub trait RedirectSource: Send + Sync {
    /// 대기 중인 리다이렉트 결과를 꺼냅니다. 없으면 `Ok(None)`.
    async fn take_redirect_result(&self) -> Result<Option<OAuthCredential>, AuthError>;
}
