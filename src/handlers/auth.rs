//! Google Sign-In HTTP Handlers
//!
//! Google 로그인 컨트롤을 HTTP로 구동하는 핸들러와, 브라우저가 전달한 OAuth 결과를
//! 팝업/리다이렉트 포트로 바꾸는 어댑터입니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/auth/google/authorize` - 인증 URL과 state 발급
//! - `POST /api/v1/auth/google/popup` - 팝업 창이 받은 결과를 부모 창이 전달
//! - `GET /api/v1/auth/google/callback` - 리다이렉트 플로우 콜백
//!
//! 두 어댑터 모두 `state`를 검증한 뒤에만 Authorization Code를 자격 증명으로 넘깁니다.

use std::sync::Arc;

use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use async_trait::async_trait;

use crate::domain::dto::OAuthResultParams;
use crate::domain::models::auth::{OAuthCredential, OAuthRequest};
use crate::domain::models::Route;
use crate::errors::{AppError, AuthError};
use crate::screens::{
    AuthClients, Feedback, GoogleSignIn, OAuthPopup, RedirectSource, ScreenRecorder, SignInOutcome,
};
use crate::services::auth::GoogleAuthService;

/// OAuth `error` 파라미터를 에러 분류로 바꿉니다.
fn oauth_error(error: &str, description: Option<&str>) -> AuthError {
    match error {
        "popup_closed_by_user" | "access_denied" => AuthError::PopupClosedByUser,
        "cancelled_popup_request" => AuthError::CancelledPopupRequest,
        other => AuthError::provider(
            format!("auth/{}", other.to_lowercase().replace('_', "-")),
            description.unwrap_or(other),
        ),
    }
}

/// OAuth 결과 파라미터를 자격 증명으로 바꿉니다.
///
/// 결과가 비어 있으면 `Ok(None)`입니다.
fn credential_from(
    params: &OAuthResultParams,
    google: &GoogleAuthService,
) -> Result<Option<OAuthCredential>, AuthError> {
    if let Some(error) = &params.error {
        log::warn!("Google OAuth 에러: {} - {:?}", error, params.error_description);
        return Err(oauth_error(error, params.error_description.as_deref()));
    }

    let (code, state) = match (&params.code, &params.state) {
        (None, None) => return Ok(None),
        (Some(code), Some(state)) => (code, state),
        _ => {
            return Err(AuthError::provider(
                "auth/argument-error",
                "The OAuth result must include both an authorization code and a state.",
            ));
        }
    };

    google.verify_state(state)?;

    Ok(Some(OAuthCredential::AuthorizationCode {
        code: code.clone(),
        redirect_uri: google.redirect_uri().to_string(),
    }))
}

/// 팝업 창이 받은 OAuth 결과를 부모 창이 전달하는 팝업 포트
pub struct RelayedPopup<'a> {
    params: OAuthResultParams,
    google: &'a GoogleAuthService,
}

impl<'a> RelayedPopup<'a> {
    pub fn new(params: OAuthResultParams, google: &'a GoogleAuthService) -> Self {
        Self { params, google }
    }
}

#[async_trait]
impl<'a> OAuthPopup for RelayedPopup<'a> {
    async fn open(&self, request: &OAuthRequest) -> Result<OAuthCredential, AuthError> {
        log::debug!("팝업 결과 수신 (provider: {}, scope: {})", request.provider.as_str(), request.scope_string());

        // 결과 없이 닫힌 팝업
        credential_from(&self.params, self.google)?.ok_or(AuthError::PopupClosedByUser)
    }
}

/// 콜백 쿼리를 대기 중인 리다이렉트 결과로 제공하는 포트
pub struct CallbackRedirect<'a> {
    params: OAuthResultParams,
    google: &'a GoogleAuthService,
}

impl<'a> CallbackRedirect<'a> {
    pub fn new(params: OAuthResultParams, google: &'a GoogleAuthService) -> Self {
        Self { params, google }
    }
}

#[async_trait]
impl<'a> RedirectSource for CallbackRedirect<'a> {
    async fn take_redirect_result(&self) -> Result<Option<OAuthCredential>, AuthError> {
        credential_from(&self.params, self.google)
    }
}

fn sign_in_response(recorder: &ScreenRecorder, outcome: SignInOutcome) -> HttpResponse {
    match outcome {
        SignInOutcome::SignedIn { user, .. } => recorder.respond(StatusCode::OK, "signed_in", None, Some(user)),
        SignInOutcome::Cancelled => recorder.respond(StatusCode::OK, "cancelled", None, None),
        SignInOutcome::Failed { error, .. } => recorder.respond(error.status_code(), "failed", None, None),
        SignInOutcome::NoPendingResult => recorder.respond(StatusCode::OK, "no_pending_result", None, None),
        SignInOutcome::Ignored => recorder.respond(StatusCode::TOO_MANY_REQUESTS, "ignored", None, None),
    }
}

/// Google OAuth 인증 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/google/authorize`
#[get("/google/authorize")]
pub async fn google_authorize_url(
    google: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let response = google.authorize_url(&OAuthRequest::google());
    Ok(HttpResponse::Ok().json(response))
}

/// 팝업 로그인 결과 처리 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/google/popup`
///
/// 본문: `{"code": "...", "state": "..."}` 또는 `{"error": "popup_closed_by_user"}`
#[post("/google/popup")]
pub async fn google_popup(
    clients: web::Data<AuthClients>,
    google: web::Data<GoogleAuthService>,
    payload: web::Json<OAuthResultParams>,
) -> Result<HttpResponse, AppError> {
    let recorder = Arc::new(ScreenRecorder::new());
    let control = GoogleSignIn::new(clients.get_ref().clone(), Feedback::new(recorder.clone()));
    let popup = RelayedPopup::new(payload.into_inner(), google.get_ref());

    let outcome = control.sign_in_with_popup(&popup).await;
    Ok(sign_in_response(&recorder, outcome))
}

/// Google OAuth 콜백 처리 핸들러
///
/// 브라우저가 직접 여는 주소이므로 `303`으로 응답합니다.
///
/// | 결과       | `Location`                |
/// |------------|---------------------------|
/// | 로그인 성공 | `/`                       |
/// | 취소       | `/login`                  |
/// | 실패       | `/login?error=<에러 코드>` |
///
/// # Endpoint
/// `GET /api/v1/auth/google/callback?code={code}&state={state}`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    clients: web::Data<AuthClients>,
    google: web::Data<GoogleAuthService>,
    query: web::Query<OAuthResultParams>,
) -> Result<HttpResponse, AppError> {
    let recorder = Arc::new(ScreenRecorder::redirecting());
    let mut control = GoogleSignIn::new(clients.get_ref().clone(), Feedback::new(recorder.clone()));
    let redirect = CallbackRedirect::new(query.into_inner(), google.get_ref());

    let outcome = control.check_redirect_result(&redirect).await;
    let location = match &outcome {
        SignInOutcome::Cancelled => Some(Route::Login.path().to_string()),
        SignInOutcome::Failed { error, .. } => Some(format!(
            "{}?error={}",
            Route::Login.path(),
            urlencoding::encode(error.code())
        )),
        _ => None,
    };

    let mut response = sign_in_response(&recorder, outcome);
    if let Some(location) = location {
        let value = HeaderValue::try_from(location)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        *response.status_mut() = StatusCode::SEE_OTHER;
        response.headers_mut().insert(LOCATION, value);
    }

    Ok(response)
}
