//! OAuth 요청 및 자격 증명 모델

use crate::config::AuthProvider;

/// OAuth 로그인 요청 설정
///
/// 팝업/리다이렉트 어느 쪽이든 동일한 요청 설정을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    pub provider: AuthProvider,
    pub scopes: Vec<String>,
    /// 인증 URL에 그대로 추가되는 프로바이더별 매개변수
    pub custom_parameters: Vec<(String, String)>,
}

impl OAuthRequest {
    /// Google 로그인 요청
    ///
    /// `email`, `profile` 스코프를 요청하고 매번 계정 선택 화면을 띄웁니다.
    pub fn google() -> Self {
        Self {
            provider: AuthProvider::Google,
            scopes: vec!["email".to_string(), "profile".to_string()],
            custom_parameters: vec![("prompt".to_string(), "select_account".to_string())],
        }
    }

    /// 공백으로 구분된 스코프 문자열
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// OAuth 팝업/리다이렉트가 끝난 뒤 얻는 자격 증명
///
/// 아이덴티티 프로바이더가 이를 사용자 레코드로 교환합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthCredential {
    /// 인증 서버가 콜백으로 전달한 Authorization Code
    AuthorizationCode { code: String, redirect_uri: String },

    /// 클라이언트가 직접 받은 Google ID 토큰
    IdToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_request() {
        let request = OAuthRequest::google();

        assert_eq!(request.provider, AuthProvider::Google);
        assert_eq!(request.scope_string(), "email profile");
        assert_eq!(
            request.custom_parameters,
            vec![("prompt".to_string(), "select_account".to_string())]
        );
    }
}
