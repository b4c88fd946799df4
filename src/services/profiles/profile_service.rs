//! # 프로필 동기화 서비스
//!
//! 인증 성공 후 프로필 문서를 저장소에 반영하는 규칙을 담당합니다.
//!
//! ## 쓰기 규칙
//!
//! | 플로우        | 동작                                 |
//! |---------------|--------------------------------------|
//! | 이메일 가입   | 무조건 쓰기 (기존 문서 덮어쓰기)       |
//! | Google 로그인 | 먼저 읽고, 문서가 없을 때만 생성       |
//!
//! 두 경우 모두 베스트 에포트입니다. 저장소 실패는 `warn` 로그만 남기고
//! [`ProfileSync::Failed`]로 돌려주며 인증 결과에는 영향을 주지 않습니다.
//! 이미 생성된 계정을 되돌리지도 않습니다.

use crate::domain::entities::ProfileDocument;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::StoreError;
use crate::repositories::ProfileStore;

/// 프로필 동기화 결과
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSync {
    /// 새 문서를 썼음
    Created,
    /// 문서가 이미 있어 쓰지 않았음
    AlreadyExists,
    /// 저장소 실패 (로그로만 보고됨)
    Failed(StoreError),
}

impl ProfileSync {
    pub fn is_failed(&self) -> bool {
        matches!(self, ProfileSync::Failed(_))
    }
}

/// 프로필 문서를 무조건 씁니다.
pub async fn write_profile(
    store: &dyn ProfileStore,
    uid: &str,
    profile: &ProfileDocument,
) -> ProfileSync {
    match store.set(uid, profile).await {
        Ok(()) => {
            log::info!("프로필 문서 생성: {}", uid);
            ProfileSync::Created
        }
        Err(e) => {
            log::warn!("프로필 문서 쓰기 실패 (무시됨) uid={}: {}", uid, e);
            ProfileSync::Failed(e)
        }
    }
}

/// OAuth 사용자의 프로필 문서가 없을 때만 생성합니다.
///
/// 읽기에 실패하면 덮어쓰기 위험을 피하기 위해 쓰기도 건너뜁니다.
pub async fn ensure_profile(store: &dyn ProfileStore, user: &AuthenticatedUser) -> ProfileSync {
    match store.get(&user.uid).await {
        Ok(Some(_)) => {
            log::debug!("기존 프로필 문서 유지: {}", user.uid);
            ProfileSync::AlreadyExists
        }
        Ok(None) => write_profile(store, &user.uid, &ProfileDocument::from_oauth_user(user)).await,
        Err(e) => {
            log::warn!("프로필 문서 조회 실패 (무시됨) uid={}: {}", user.uid, e);
            ProfileSync::Failed(e)
        }
    }
}
