//! 프로필 문서 리포지토리 모듈
//!
//! [`ProfileStore`](profile_repo::ProfileStore) 포트와 MongoDB 기반 구현을 제공합니다.

pub mod profile_repo;
