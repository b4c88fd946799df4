//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 화면 컨트롤러와 HTTP 계층을 위한 에러 타입을 한 곳에 모아둡니다.
//! 실패 도메인은 세 가지로 분리되어 있습니다.
//!
//! - [`AuthError`]: 아이덴티티 프로바이더 실패 (계정 생성, OAuth). 사용자에게 알림으로 노출됩니다.
//! - [`StoreError`]: 프로필 저장소 실패. 로그만 남기고 사용자에게 노출하지 않습니다.
//! - [`AppError`]: 설정 로딩, 요청 검증 등 프로세스/HTTP 수준의 에러입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AuthError;
//!
//! let error = AuthError::from_identity_toolkit("EMAIL_EXISTS");
//! assert_eq!(error.code(), "auth/email-already-in-use");
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 화면 플로우 바깥(설정, 요청 검증, 서버 구동)에서 발생하는 에러를 표현합니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 설정 누락 또는 파싱 실패 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 데이터베이스 연결 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 아이덴티티 프로바이더 에러
///
/// 계정 생성과 OAuth 로그인 과정에서 프로바이더가 돌려준 실패를 분류합니다.
/// 화면에서 맞춤 메시지를 보여줄 수 있는 원인만 별도 변형으로 두고,
/// 나머지는 `Provider`에 코드와 메시지를 그대로 담습니다.
///
/// 모든 변형은 현재 시도에 대해 종결적입니다. 자동 재시도는 없습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 이미 가입된 이메일
    #[error("The email address is already in use by another account.")]
    EmailAlreadyInUse,

    /// 프로바이더 정책에 미달하는 비밀번호
    #[error("{0}")]
    WeakPassword(String),

    /// 형식이 잘못된 이메일
    #[error("The email address is badly formatted.")]
    InvalidEmail,

    /// 사용자가 팝업을 닫음
    #[error("The popup has been closed by the user before finalizing the operation.")]
    PopupClosedByUser,

    /// 다른 팝업 요청에 의해 취소됨
    #[error("This operation has been cancelled due to another conflicting popup being opened.")]
    CancelledPopupRequest,

    /// 분류되지 않은 프로바이더 에러
    #[error("{message}")]
    Provider { code: String, message: String },

    /// 프로바이더와의 통신 실패
    #[error("A network error has occurred: {0}")]
    Network(String),
}

impl AuthError {
    /// 프로바이더 에러 코드를 반환합니다. (`auth/...` 형식)
    pub fn code(&self) -> &str {
        match self {
            AuthError::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthError::WeakPassword(_) => "auth/weak-password",
            AuthError::InvalidEmail => "auth/invalid-email",
            AuthError::PopupClosedByUser => "auth/popup-closed-by-user",
            AuthError::CancelledPopupRequest => "auth/cancelled-popup-request",
            AuthError::Provider { code, .. } => code,
            AuthError::Network(_) => "auth/network-request-failed",
        }
    }

    /// 사용자가 직접 취소한 경우인지 확인합니다.
    ///
    /// 취소는 에러 알림 없이 조용히 끝나야 합니다.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AuthError::PopupClosedByUser | AuthError::CancelledPopupRequest)
    }

    /// 분류되지 않은 프로바이더 에러를 생성합니다.
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        AuthError::Provider {
            code: code.into(),
            message: message.into(),
        }
    }

    /// HTTP 응답 상태 코드
    ///
    /// 취소는 정상 종료이므로 200입니다.
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AuthError::EmailAlreadyInUse => StatusCode::CONFLICT,
            AuthError::WeakPassword(_) | AuthError::InvalidEmail => StatusCode::BAD_REQUEST,
            AuthError::PopupClosedByUser | AuthError::CancelledPopupRequest => StatusCode::OK,
            AuthError::Provider { code, .. } if BAD_REQUEST_CODES.contains(&code.as_str()) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Provider { .. } | AuthError::Network(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Identity Toolkit REST 에러 메시지를 분류합니다.
    ///
    /// 프로바이더는 `"EMAIL_EXISTS"` 또는 `"WEAK_PASSWORD : Password should be at least 6 characters"`
    /// 처럼 `CODE[ : detail]` 형식의 메시지를 돌려줍니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let error = AuthError::from_identity_toolkit("OPERATION_NOT_ALLOWED : Password sign-in is disabled");
    /// assert_eq!(error.code(), "auth/operation-not-allowed");
    /// assert_eq!(error.to_string(), "Password sign-in is disabled");
    /// ```
    pub fn from_identity_toolkit(raw: &str) -> Self {
        let (code, detail) = match raw.split_once(" : ") {
            Some((code, detail)) => (code.trim(), detail.trim()),
            None => (raw.trim(), ""),
        };

        match code {
            "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse,
            "WEAK_PASSWORD" => AuthError::WeakPassword(if detail.is_empty() {
                "Password should be at least 6 characters".to_string()
            } else {
                detail.to_string()
            }),
            "INVALID_EMAIL" => AuthError::InvalidEmail,
            _ => {
                let code = format!("auth/{}", code.to_lowercase().replace('_', "-"));
                let message = if detail.is_empty() {
                    format!("Identity provider error ({})", code)
                } else {
                    detail.to_string()
                };
                AuthError::Provider { code, message }
            }
        }
    }
}

/// 요청 자체가 잘못된 경우의 프로바이더 에러 코드
const BAD_REQUEST_CODES: &[&str] = &[
    "auth/invalid-oauth-state",
    "auth/invalid-credential",
    "auth/argument-error",
    "auth/missing-email",
    "auth/missing-password",
];

/// 요청 URL에는 API 키가 포함되므로 메시지에서 제외합니다.
impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::Network(error.without_url().to_string())
    }
}

/// 프로필 저장소 에러
///
/// 프로필 문서 읽기/쓰기 실패입니다. 두 플로우 모두에서 비치명적으로 취급되어
/// 로그만 남고 사용자에게는 노출되지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(error: mongodb::error::Error) -> Self {
        StoreError::Database(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("state is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("token endpoint down".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_config_error_response() {
        let error = AppError::ConfigError("IDENTITY_API_KEY must be set".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_identity_toolkit_known_codes() {
        assert_eq!(AuthError::from_identity_toolkit("EMAIL_EXISTS"), AuthError::EmailAlreadyInUse);
        assert_eq!(AuthError::from_identity_toolkit("INVALID_EMAIL"), AuthError::InvalidEmail);

        let weak = AuthError::from_identity_toolkit("WEAK_PASSWORD : Password should be at least 6 characters");
        assert_eq!(weak.code(), "auth/weak-password");
        assert_eq!(weak.to_string(), "Password should be at least 6 characters");
    }

    #[test]
    fn test_identity_toolkit_unknown_code() {
        let error = AuthError::from_identity_toolkit("TOO_MANY_ATTEMPTS_TRY_LATER : Try again later.");
        assert_eq!(error.code(), "auth/too-many-attempts-try-later");
        assert_eq!(error.to_string(), "Try again later.");

        // detail 없는 코드는 코드 자체를 메시지로 사용
        let bare = AuthError::from_identity_toolkit("OPERATION_NOT_ALLOWED");
        assert_eq!(bare.code(), "auth/operation-not-allowed");
        assert!(bare.to_string().contains("auth/operation-not-allowed"));
    }

    #[test]
    fn test_auth_error_status_codes() {
        use actix_web::http::StatusCode;

        assert_eq!(AuthError::EmailAlreadyInUse.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::InvalidEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::WeakPassword("short".to_string()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::PopupClosedByUser.status_code(), StatusCode::OK);
        assert_eq!(
            AuthError::provider("auth/invalid-oauth-state", "expired").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::provider("auth/too-many-attempts-try-later", "later").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(AuthError::Network("reset".to_string()).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_cancellation_codes() {
        assert!(AuthError::PopupClosedByUser.is_cancellation());
        assert!(AuthError::CancelledPopupRequest.is_cancellation());
        assert!(!AuthError::EmailAlreadyInUse.is_cancellation());
        assert!(!AuthError::provider("auth/popup-blocked", "blocked").is_cancellation());
    }
}
