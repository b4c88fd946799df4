//! # Google OAuth 2.0 인증 URL/State 서비스
//!
//! Google 로그인 팝업 또는 리다이렉트가 여는 Authorization URL을 만들고,
//! CSRF 방지용 `state` 값을 발급/검증합니다.
//!
//! ## 팝업/리다이렉트 플로우
//!
//! ```text
//! ┌─────────────┐            ┌─────────────────┐            ┌─────────────────┐
//! │  브라우저     │            │   auth_portal   │            │  Google OAuth   │
//! └─────────────┘            └─────────────────┘            └─────────────────┘
//!        │ 1. GET /api/v1/auth/google/authorize │                      │
//!        ├─────────────────────────►│                                  │
//!        │ 2. { authorize_url, state }                                 │
//!        │◄─────────────────────────┤                                  │
//!        │ 3. 팝업 또는 현재 창에서 authorize_url 열기                       │
//!        ├────────────────────────────────────────────────────────────►│
//!        │ 4. redirect_uri?code=...&state=...                          │
//!        │◄────────────────────────────────────────────────────────────┤
//!        │ 5a. (팝업) POST /api/v1/auth/google/popup                     │
//!        │ 5b. (리다이렉트) GET /api/v1/auth/google/callback              │
//!        ├─────────────────────────►│ 6. state 검증, 코드 교환, 프로필 확인 │
//! ```
//!
//! ## State 형식
//!
//! 서버 측 세션 없이 검증할 수 있도록 서명된 값을 사용합니다.
//!
//! ```text
//! state = "{timestamp}.{nonce}.{base64url(sha256(timestamp.nonce.secret))}"
//! ```
//!
//! 검증 시 서명을 다시 계산하고 발급 시각이 TTL 이내인지 확인합니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::config::GoogleOAuthConfig;
use crate::domain::dto::AuthorizeUrlResponse;
use crate::domain::models::auth::OAuthRequest;
use crate::errors::AuthError;

/// Google OAuth URL/State 서비스
///
/// 설정만 보관하는 가벼운 구조체입니다. 애플리케이션 시작 시 한 번 생성되어
/// HTTP 핸들러에 공유됩니다.
#[derive(Debug, Clone)]
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
}

impl GoogleAuthService {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self { config }
    }

    /// 콜백 URI (토큰 교환 시에도 동일한 값을 보내야 함)
    pub fn redirect_uri(&self) -> &str {
        &self.config.redirect_uri
    }

    /// Google OAuth Authorization URL 생성
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=https://yourapp.com/api/v1/auth/google/callback&
    ///   scope=email%20profile&
    ///   response_type=code&
    ///   state=CSRF_PROTECTION_VALUE&
    ///   prompt=select_account
    /// ```
    pub fn authorize_url(&self, request: &OAuthRequest) -> AuthorizeUrlResponse {
        let state = self.issue_state();

        let mut params = vec![
            ("client_id".to_string(), self.config.client_id.clone()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("scope".to_string(), request.scope_string()),
            ("response_type".to_string(), "code".to_string()),
            ("state".to_string(), state.clone()),
        ];
        params.extend(request.custom_parameters.iter().cloned());

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        AuthorizeUrlResponse {
            authorize_url: format!("{}?{}", self.config.auth_uri, query_string),
            state,
        }
    }

    /// 새 state 값을 발급합니다.
    pub fn issue_state(&self) -> String {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        self.sign_state(Utc::now().timestamp(), &nonce)
    }

    /// 콜백으로 돌아온 state 값을 검증합니다.
    pub fn verify_state(&self, state: &str) -> Result<(), AuthError> {
        self.verify_state_at(state, Utc::now().timestamp())
    }

    fn verify_state_at(&self, state: &str, now: i64) -> Result<(), AuthError> {
        let mut parts = state.splitn(3, '.');
        let (Some(timestamp), Some(nonce), Some(signature)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid_state());
        };

        let issued_at = timestamp.parse::<i64>().map_err(|_| invalid_state())?;

        if !constant_time_eq(self.signature(issued_at, nonce).as_bytes(), signature.as_bytes()) {
            log::warn!("OAuth state 서명 불일치");
            return Err(invalid_state());
        }

        let age = now - issued_at;
        if age < 0 || age > self.config.state_ttl_minutes * 60 {
            log::warn!("만료된 OAuth state (발급 후 {}초)", age);
            return Err(invalid_state());
        }

        Ok(())
    }

    fn sign_state(&self, timestamp: i64, nonce: &str) -> String {
        format!("{}.{}.{}", timestamp, nonce, self.signature(timestamp, nonce))
    }

    fn signature(&self, timestamp: i64, nonce: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{}.{}.{}", timestamp, nonce, self.config.state_secret));
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

/// 길이가 같으면 내용과 무관하게 모든 바이트를 비교합니다.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn invalid_state() -> AuthError {
    AuthError::provider(
        "auth/invalid-oauth-state",
        "The sign-in request is invalid or has expired. Please try again.",
    )
}
