//! Profile Document Entity
//!
//! 사용자별 표시용 메타데이터 문서입니다.
//! 아이덴티티 프로바이더의 자격 증명 레코드와는 별개이며,
//! 프로바이더가 발급한 사용자 식별자(`uid`)를 문서 키로 사용합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::AuthenticatedUser;
use crate::utils::string_utils::split_display_name;

/// 프로필 문서
///
/// 저장 형식의 필드명은 camelCase(`firstName`, `createdAt` ...)를 사용합니다.
/// 스키마나 유일성은 문서 저장소가 소유하며, 이 코드는 쓰기를 제안할 뿐입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// 프로바이더 레코드의 이메일 (없을 수 있음)
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// 프로필 사진 URL (없으면 빈 문자열)
    pub photo: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ProfileDocument {
    /// 이메일/비밀번호 가입으로 생성되는 프로필
    ///
    /// 이름은 폼에 입력된 값을 그대로 사용하고 사진은 비워둡니다.
    pub fn for_registration(email: Option<String>, first_name: &str, last_name: &str) -> Self {
        let now = DateTime::now();

        Self {
            email,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            photo: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// OAuth 로그인 사용자로부터 생성되는 프로필
    ///
    /// 표시 이름을 공백 기준으로 나누어 첫 토큰은 이름, 나머지는 성으로 사용합니다.
    pub fn from_oauth_user(user: &AuthenticatedUser) -> Self {
        let now = DateTime::now();
        let (first_name, last_name) = split_display_name(user.display_name.as_deref());

        Self {
            email: user.email.clone(),
            first_name,
            last_name,
            photo: user.photo_url.clone().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    fn google_user(display_name: Option<&str>, photo: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            uid: "g-1".to_string(),
            email: Some("ada@example.com".to_string()),
            display_name: display_name.map(str::to_string),
            photo_url: photo.map(str::to_string),
            provider: AuthProvider::Google,
        }
    }

    #[test]
    fn test_from_oauth_user_splits_name() {
        let profile = ProfileDocument::from_oauth_user(&google_user(
            Some("Ada King Lovelace"),
            Some("https://example.com/ada.png"),
        ));

        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.last_name, "King Lovelace");
        assert_eq!(profile.photo, "https://example.com/ada.png");
        assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn test_from_oauth_user_without_name_or_photo() {
        let profile = ProfileDocument::from_oauth_user(&google_user(None, None));

        assert_eq!(profile.first_name, "");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.photo, "");
    }

    #[test]
    fn test_serialized_field_names() {
        let profile = ProfileDocument::for_registration(Some("new@x.com".to_string()), "New", "User");
        let document = mongodb::bson::to_document(&profile).unwrap();

        assert_eq!(document.get_str("firstName").unwrap(), "New");
        assert_eq!(document.get_str("lastName").unwrap(), "User");
        assert_eq!(document.get_str("photo").unwrap(), "");
        assert!(document.get_datetime("createdAt").is_ok());
        assert!(document.get_datetime("updatedAt").is_ok());
    }
}
