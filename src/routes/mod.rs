//! API 라우트 설정 모듈
//!
//! 회원가입, Google 로그인 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // `/api/v1/auth` 스코프가 `/api/v1` 스코프보다 먼저 등록되어야 함
    configure_auth_routes(cfg);
    configure_registration_routes(cfg);
}

/// 회원가입 화면 라우트
///
/// - `POST /api/v1/password-strength` - 비밀번호 강도 미리보기
/// - `POST /api/v1/register` - 회원가입 제출
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/register \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Ada","last_name":"Lovelace","email":"new@x.com","password":"Abc12345!"}'
/// ```
fn configure_registration_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::register::password_strength)
            .service(handlers::register::register)
    );
}

/// Google 로그인 라우트
///
/// - `GET /api/v1/auth/google/authorize` - 인증 URL 생성
/// - `POST /api/v1/auth/google/popup` - 팝업 결과 처리
/// - `GET /api/v1/auth/google/callback` - 리다이렉트 콜백 처리
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::google_authorize_url)
            .service(handlers::auth::google_popup)
            .service(handlers::auth::google_oauth_callback)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "auth_portal",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "identity": "Identity Toolkit",
///     "database": "MongoDB"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "auth_portal",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "identity": "Identity Toolkit",
            "database": "MongoDB"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "auth_portal");
    }

    #[actix_web::test]
    async fn test_password_strength_route_is_mounted() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/password-strength")
            .set_json(json!({ "password": "Abc12345!" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["score"], 5);
        assert_eq!(body["level"], "Strong");
        assert_eq!(body["tone"], "success");
    }
}
