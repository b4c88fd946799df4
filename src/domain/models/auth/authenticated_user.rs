//! 인증된 사용자 모델

use serde::Serialize;

use crate::config::AuthProvider;

/// 아이덴티티 프로바이더가 인증에 성공한 뒤 돌려주는 사용자 정보
///
/// 프로바이더가 소유한 레코드의 읽기 전용 사본입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    /// 프로바이더 사용자 식별자. 프로필 문서의 키로 사용됩니다.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub provider: AuthProvider,
}
