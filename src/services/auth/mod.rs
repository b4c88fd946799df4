//! 인증 서비스 모듈
//!
//! 아이덴티티 프로바이더 연동과 Google OAuth 2.0 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 이메일/비밀번호 계정 생성 (Identity Toolkit `accounts:signUp`)
//! - Google 자격 증명 로그인 (Authorization Code 교환 후 `accounts:signInWithIdp`)
//! - Google OAuth Authorization URL 생성
//! - 서명된 OAuth State 발급/검증 (CSRF 방지)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{GoogleAuthService, IdentityToolkitClient};
//! use crate::domain::models::auth::OAuthRequest;
//!
//! let google_auth = GoogleAuthService::new(config.google.clone());
//! let login = google_auth.authorize_url(&OAuthRequest::google());
//!
//! let identity = IdentityToolkitClient::new(config.identity.clone(), config.google.clone());
//! let user = identity.create_user_with_email_and_password("new@x.com", "Abc12345!").await?;
//! ```

pub mod google_auth_service;
pub mod identity_service;

pub use google_auth_service::*;
pub use identity_service::*;
