//! 인증 포털 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 프로바이더 클라이언트를 초기화합니다.
//! 설정은 시작 시 한 번 읽어 명시적으로 각 컴포넌트에 전달합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use auth_portal::config::{AppConfig, ServerConfig};
use auth_portal::db::Database;
use auth_portal::errors::{AppError, AppResult};
use auth_portal::repositories::MongoProfileRepository;
use auth_portal::routes::configure_all_routes;
use auth_portal::screens::AuthClients;
use auth_portal::services::auth::{GoogleAuthService, IdentityToolkitClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 인증 포털 시작중...");

    let config = AppConfig::from_env().map_err(into_io_error)?;
    info!("환경: {:?}", config.environment);

    // 프로바이더 클라이언트 초기화
    let clients = initialize_clients(&config).await.map_err(into_io_error)?;
    let google = GoogleAuthService::new(config.google.clone());

    info!("✅ 모든 클라이언트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, clients, google).await
}

fn into_io_error(e: AppError) -> std::io::Error {
    error!("❌ 시작 실패: {}", e);
    std::io::Error::other(e.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    clients: AuthClients,
    google: GoogleAuthService,
) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 잘못되었습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let clients = web::Data::new(clients);
    let google = web::Data::new(google);
    let flow = web::Data::new(config.flow.clone());
    let server_config = config.server.clone();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&server_config);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 상태
            .app_data(clients.clone())
            .app_data(google.clone())
            .app_data(flow.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// RUST_LOG=auth_portal::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 아이덴티티 프로바이더와 프로필 저장소 클라이언트를 초기화합니다
///
/// # Errors
///
/// * MongoDB 연결 실패 시 `AppError::DatabaseError`
async fn initialize_clients(config: &AppConfig) -> AppResult<AuthClients> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new(&config.database).await?);
    let profiles = MongoProfileRepository::new(database, config.database.profile_collection.clone());

    let identity = IdentityToolkitClient::new(config.identity.clone(), config.google.clone());
    info!("🔑 아이덴티티 프로바이더: {}", config.identity.endpoint);

    Ok(AuthClients::new(Arc::new(identity), Arc::new(profiles)))
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 프론트엔드 Origin만 허용합니다.
fn configure_cors(server: &ServerConfig) -> Cors {
    let cors = server
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION, header::HeaderName::from_static("refresh")])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
