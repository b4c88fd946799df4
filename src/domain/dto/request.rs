//! HTTP 요청 DTO
//!
//! 이메일 형식이나 비밀번호 정책은 아이덴티티 프로바이더가 검증하므로
//! 여기서는 필수 입력 여부만 확인합니다.

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 폼 제출
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 비밀번호 강도 미리보기
#[derive(Debug, Deserialize)]
pub struct PasswordStrengthRequest {
    #[serde(default)]
    pub password: String,
}

/// OAuth 결과 (팝업 릴레이 본문 또는 콜백 쿼리)
///
/// 성공 시 `code`와 `state`, 실패 시 `error`(와 선택적으로 `error_description`)가 옵니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthResultParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_requires_email_and_password() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"first_name": "  ", "email": "", "password": "x"}"#).unwrap();

        assert_eq!(request.first_name, None);
        assert_eq!(request.last_name, None);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_does_not_check_email_format() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"email": "not-an-email", "password": "x"}"#).unwrap();

        assert!(request.validate().is_ok());
    }
}
