//! # 프로필 리포지토리 구현
//!
//! 프로필 문서의 데이터 액세스 계층입니다.
//! 문서는 아이덴티티 프로바이더의 사용자 식별자(`uid`)를 `_id`로 사용합니다.
//!
//! ## 특징
//!
//! - **키 기반 접근**: `_id = uid` 단건 조회/쓰기만 수행
//! - **덮어쓰기 쓰기**: `set`은 문서 전체를 교체하며 없으면 생성 (upsert)
//! - **스키마 무관**: 유일성이나 스키마는 저장소가 소유하며 이 코드는 강제하지 않음

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::ProfileDocument;
use crate::errors::StoreError;

/// 프로필 문서 저장소 포트
///
/// 화면 플로우는 이 trait에만 의존합니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `uid`에 해당하는 프로필 문서를 조회합니다.
    async fn get(&self, uid: &str) -> Result<Option<ProfileDocument>, StoreError>;

    /// `uid`에 프로필 문서를 씁니다. 기존 문서가 있으면 덮어씁니다.
    async fn set(&self, uid: &str, profile: &ProfileDocument) -> Result<(), StoreError>;
}

/// MongoDB 기반 프로필 리포지토리
#[derive(Clone)]
pub struct MongoProfileRepository {
    db: Arc<Database>,
    collection_name: String,
}

impl MongoProfileRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<ProfileDocument> {
        self.db.get_database().collection(&self.collection_name)
    }
}

#[async_trait]
impl ProfileStore for MongoProfileRepository {
    async fn get(&self, uid: &str) -> Result<Option<ProfileDocument>, StoreError> {
        let profile = self.collection()
            .find_one(doc! { "_id": uid })
            .await?;

        Ok(profile)
    }

    async fn set(&self, uid: &str, profile: &ProfileDocument) -> Result<(), StoreError> {
        self.collection()
            .replace_one(doc! { "_id": uid }, profile)
            .upsert(true)
            .await?;

        log::debug!("프로필 문서 저장: {}/{}", self.collection_name, uid);
        Ok(())
    }
}
