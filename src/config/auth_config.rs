//! # Authentication Configuration Module
//!
//! 아이덴티티 프로바이더와 Google OAuth 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 아이덴티티 프로바이더
//! ```bash
//! export IDENTITY_API_KEY="your-web-api-key"
//! export IDENTITY_ENDPOINT="https://identitytoolkit.googleapis.com/v1"   # 선택
//! ```
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//! ```
//!
//! ### OAuth 보안 설정
//! ```bash
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_STATE_TTL_MINUTES="10"
//! ```

use std::env;

use crate::config::data_config::{parse_or, required};
use crate::errors::AppError;

/// 아이덴티티 프로바이더(REST) 설정
///
/// 계정 생성과 IdP 로그인 요청을 보낼 엔드포인트와 웹 API 키입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_key: required(&lookup, "IDENTITY_API_KEY")?,
            endpoint: lookup("IDENTITY_ENDPOINT")
                .unwrap_or_else(|| "https://identitytoolkit.googleapis.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보와
/// 팝업/리다이렉트 플로우의 state 서명 설정을 함께 보관합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// 기본값: `https://accounts.google.com/o/oauth2/auth`
    pub auth_uri: String,
    /// 기본값: `https://oauth2.googleapis.com/token`
    pub token_uri: String,
    pub state_secret: String,
    /// 발급된 state 값의 유효 시간 (분)
    pub state_ttl_minutes: i64,
}

impl GoogleOAuthConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let state_secret = lookup("OAUTH_STATE_SECRET").unwrap_or_else(|| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        });

        Ok(Self {
            client_id: required(&lookup, "GOOGLE_CLIENT_ID")?,
            client_secret: required(&lookup, "GOOGLE_CLIENT_SECRET")?,
            redirect_uri: required(&lookup, "GOOGLE_REDIRECT_URI")?,
            auth_uri: lookup("GOOGLE_AUTH_URI")
                .unwrap_or_else(|| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
            state_secret,
            state_ttl_minutes: parse_or(&lookup, "OAUTH_STATE_TTL_MINUTES", 10i64),
        })
    }
}

/// 인증 프로바이더
///
/// 프로바이더가 돌려준 사용자 레코드가 어떤 방식으로 인증되었는지 나타냅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    /// 이메일/비밀번호
    Password,

    Google,
}

impl AuthProvider {
    /// 프로바이더 식별자 (IdP 요청의 `providerId` 값)
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Password => "password",
            AuthProvider::Google => "google.com",
        }
    }
}
