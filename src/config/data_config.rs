//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 화면 플로우 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 환경 변수 값을 파싱하고 실패 시 기본값을 사용합니다.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            log::error!("{} 파싱 실패: {:?}. 기본값 {} 사용", key, raw, default);
            default
        }),
        None => default,
    }
}

/// 필수 환경 변수를 읽습니다. 비어 있으면 설정 에러를 반환합니다.
pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

/// MongoDB 프로필 저장소 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "auth_portal_dev")
/// - `PROFILE_COLLECTION`: 프로필 문서 컬렉션 이름 (기본값: "Users")
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub profile_collection: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "auth_portal_dev".to_string()),
            profile_collection: lookup("PROFILE_COLLECTION").unwrap_or_else(|| "Users".to_string()),
        }
    }
}

/// 화면 플로우 설정
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    /// 회원가입 성공 후 로그인 화면으로 이동하기까지의 지연
    pub login_redirect_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            login_redirect_delay: Duration::from_millis(2000),
        }
    }
}

impl FlowConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = parse_or(&lookup, "LOGIN_REDIRECT_DELAY_MS", 2000u64);

        Self {
            login_redirect_delay: Duration::from_millis(millis),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080u16),
            allowed_origins,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100u64),
            burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200u32),
        }
    }
}
