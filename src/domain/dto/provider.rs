//! 외부 프로바이더 응답 DTO
//!
//! Identity Toolkit REST API와 Google 토큰 엔드포인트의 요청/응답 형식입니다.
//! 필요한 필드만 정의하며 나머지는 무시합니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub local_id: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpRequest {
    /// `id_token=...&providerId=google.com` 형식의 폼 인코딩 문자열
    pub post_body: String,
    pub request_uri: String,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpResponse {
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
}

/// `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`
#[derive(Debug, Deserialize)]
pub struct IdentityToolkitErrorBody {
    pub error: IdentityToolkitError,
}

#[derive(Debug, Deserialize)]
pub struct IdentityToolkitError {
    pub code: Option<u16>,
    pub message: String,
}

/// Google 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub id_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// `{"error": "invalid_grant", "error_description": "Bad Request"}`
#[derive(Debug, Deserialize)]
pub struct GoogleTokenErrorBody {
    pub error: String,
    pub error_description: Option<String>,
}
