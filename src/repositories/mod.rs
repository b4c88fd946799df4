//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 프로필 문서 저장소 포트([`ProfileStore`])와 MongoDB 구현체를 제공합니다.
//! 인스턴스는 애플리케이션 시작 시 명시적으로 생성되어 `Arc`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::profiles::profile_repo::MongoProfileRepository;
//!
//! let profiles = MongoProfileRepository::new(database.clone(), "Users");
//! let profile = profiles.get("uid-123").await?;
//! ```

pub mod profiles;

pub use profiles::profile_repo::{MongoProfileRepository, ProfileStore};
