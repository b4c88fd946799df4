//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 한 번 읽어 명시적인 구조체로 만들고,
//! 이후에는 그 구조체를 각 컴포넌트에 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 화면 플로우 설정
//! - [`auth_config`] - 아이덴티티 프로바이더, Google OAuth 설정
//!
//! ## 테스트 가능한 파싱
//!
//! 모든 설정 구조체는 `from_env()` 외에 `from_lookup(|key| ...)` 생성자를 제공하므로
//! 프로세스 환경 변수를 건드리지 않고 파싱 로직을 검증할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::errors::AppError;

/// 애플리케이션 시작 시 한 번 로드되는 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub database: DatabaseConfig,
    pub identity: IdentityConfig,
    pub google: GoogleOAuthConfig,
    pub flow: FlowConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            environment: Environment::from_str(
                &lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),
            ),
            server: ServerConfig::from_lookup(&lookup),
            rate_limit: RateLimitConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            identity: IdentityConfig::from_lookup(&lookup)?,
            google: GoogleOAuthConfig::from_lookup(&lookup)?,
            flow: FlowConfig::from_lookup(&lookup),
        })
    }
}
