//! Database Connection Management Module
//!
//! 프로필 문서를 보관하는 MongoDB 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
//! let profiles = MongoProfileRepository::new(database, "Users");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션에 접근하기 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화하고 `ping` 명령으로 연결 상태를 검증한 후 반환합니다.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("auth_portal".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
