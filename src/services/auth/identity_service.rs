//! # 아이덴티티 프로바이더 클라이언트
//!
//! 관리형 아이덴티티 프로바이더(Identity Toolkit REST API)에 대한 포트와 구현입니다.
//!
//! ## 지원 작업
//!
//! - `accounts:signUp` - 이메일/비밀번호 계정 생성
//! - `accounts:signInWithIdp` - Google 자격 증명으로 로그인 (필요 시 계정 생성)
//!
//! Authorization Code 자격 증명은 먼저 Google 토큰 엔드포인트에서 토큰으로 교환한 뒤
//! `signInWithIdp`에 전달합니다.
//!
//! ## 에러 분류
//!
//! 프로바이더의 `{"error": {"message": "EMAIL_EXISTS"}}` 응답은
//! [`AuthError::from_identity_toolkit`]으로 분류되고, 전송 실패는
//! `auth/network-request-failed`가 됩니다.

use async_trait::async_trait;

use crate::config::{AuthProvider, GoogleOAuthConfig, IdentityConfig};
use crate::domain::dto::provider::{
    GoogleTokenErrorBody, GoogleTokenResponse, IdentityToolkitErrorBody, SignInWithIdpRequest,
    SignInWithIdpResponse, SignUpRequest, SignUpResponse,
};
use crate::domain::models::auth::{AuthenticatedUser, OAuthCredential};
use crate::errors::AuthError;

/// 아이덴티티 프로바이더 포트
///
/// 화면 플로우는 이 trait에만 의존합니다. 테스트에서는 가짜 구현으로 교체됩니다.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 이메일/비밀번호로 새 계정을 생성합니다.
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;

    /// OAuth 자격 증명을 프로바이더 사용자 레코드로 교환합니다.
    async fn sign_in_with_credential(
        &self,
        credential: OAuthCredential,
    ) -> Result<AuthenticatedUser, AuthError>;
}

/// Identity Toolkit REST 클라이언트
#[derive(Debug, Clone)]
pub struct IdentityToolkitClient {
    http: reqwest::Client,
    identity: IdentityConfig,
    google: GoogleOAuthConfig,
}

impl IdentityToolkitClient {
    pub fn new(identity: IdentityConfig, google: GoogleOAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            identity,
            google,
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.identity.endpoint, method, self.identity.api_key)
    }

    /// Authorization Code를 Google 액세스/ID 토큰으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `auth/invalid-credential` - 코드가 만료되었거나 이미 사용됨
    /// * `auth/network-request-failed` - 토큰 엔드포인트에 연결할 수 없음
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GoogleTokenResponse, AuthError> {
        let params = [
            ("code", code),
            ("client_id", self.google.client_id.as_str()),
            ("client_secret", self.google.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.google.token_uri)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.json::<GoogleTokenErrorBody>().await.ok();
            log::error!("Google 토큰 교환 실패 ({}): {:?}", status, body);

            let message = body
                .and_then(|b| b.error_description.or(Some(b.error)))
                .unwrap_or_else(|| format!("Token exchange failed with status {}", status));
            return Err(AuthError::provider("auth/invalid-credential", message));
        }

        let token = response.json::<GoogleTokenResponse>().await?;
        log::debug!("Google 토큰 교환 성공 (id_token 포함: {})", token.id_token.is_some());
        Ok(token)
    }

    /// 프로바이더 응답을 JSON으로 읽거나 에러 본문을 분류합니다.
    async fn read_response<T>(response: reqwest::Response) -> Result<T, AuthError>
    where
        T: serde::de::DeserializeOwned,
    {
        if response.status().is_success() {
            return Ok(response.json::<T>().await?);
        }

        let status = response.status();
        match response.json::<IdentityToolkitErrorBody>().await {
            Ok(body) => Err(AuthError::from_identity_toolkit(&body.error.message)),
            Err(_) => Err(AuthError::provider(
                "auth/internal-error",
                format!("Identity provider responded with status {}", status),
            )),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let request = SignUpRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self.http
            .post(self.endpoint("signUp"))
            .json(&request)
            .send()
            .await?;

        let body: SignUpResponse = Self::read_response(response).await?;
        log::debug!("계정 생성 응답 수신: uid={}", body.local_id);

        Ok(AuthenticatedUser {
            uid: body.local_id,
            email: body.email.or_else(|| Some(email.to_string())),
            display_name: None,
            photo_url: None,
            provider: AuthProvider::Password,
        })
    }

    async fn sign_in_with_credential(
        &self,
        credential: OAuthCredential,
    ) -> Result<AuthenticatedUser, AuthError> {
        let (token_param, request_uri) = match credential {
            OAuthCredential::AuthorizationCode { code, redirect_uri } => {
                let token = self.exchange_code_for_token(&code, &redirect_uri).await?;
                let param = match token.id_token {
                    Some(id_token) => format!("id_token={}", urlencoding::encode(&id_token)),
                    None => format!("access_token={}", urlencoding::encode(&token.access_token)),
                };
                (param, redirect_uri)
            }
            OAuthCredential::IdToken(id_token) => (
                format!("id_token={}", urlencoding::encode(&id_token)),
                self.google.redirect_uri.clone(),
            ),
        };

        let request = SignInWithIdpRequest {
            post_body: format!("{}&providerId={}", token_param, AuthProvider::Google.as_str()),
            request_uri,
            return_secure_token: true,
            return_idp_credential: true,
        };

        let response = self.http
            .post(self.endpoint("signInWithIdp"))
            .json(&request)
            .send()
            .await?;

        let body: SignInWithIdpResponse = Self::read_response(response).await?;
        log::debug!("IdP 로그인 응답 수신: uid={}", body.local_id);

        Ok(AuthenticatedUser {
            uid: body.local_id,
            email: body.email,
            display_name: body.display_name.or(body.full_name),
            photo_url: body.photo_url,
            provider: AuthProvider::Google,
        })
    }
}
