//! Registration HTTP Handlers
//!
//! 회원가입 폼을 HTTP로 구동하는 핸들러입니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/password-strength` - 입력 중인 비밀번호의 강도 미리보기
//! - `POST /api/v1/register` - 회원가입 제출

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::config::FlowConfig;
use crate::domain::dto::{FormSnapshot, PasswordStrengthRequest, PasswordStrengthResponse, RegisterRequest};
use crate::domain::models::PasswordStrength;
use crate::errors::AppError;
use crate::screens::{
    AuthClients, Feedback, RegistrationFields, RegistrationForm, RegistrationOutcome, ScreenRecorder,
};

/// 비밀번호 강도 미리보기 핸들러
///
/// 제출과 무관한 참고용 점수입니다.
///
/// # Endpoint
/// `POST /api/v1/password-strength`
#[post("/password-strength")]
pub async fn password_strength(payload: web::Json<PasswordStrengthRequest>) -> HttpResponse {
    let strength = PasswordStrength::evaluate(&payload.password);
    HttpResponse::Ok().json(PasswordStrengthResponse::from(strength))
}

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/register`
///
/// # Responses
///
/// | 상태 | 결과                                           |
/// |------|------------------------------------------------|
/// | 200  | 계정 생성 (`Refresh` 헤더로 `/login` 지연 이동) |
/// | 400  | 약한 비밀번호, 잘못된 이메일, 필수값 누락       |
/// | 409  | 이미 가입된 이메일                              |
/// | 502  | 그 외 프로바이더 실패                           |
#[post("/register")]
pub async fn register(
    clients: web::Data<AuthClients>,
    flow: web::Data<FlowConfig>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let recorder = Arc::new(ScreenRecorder::new());
    let mut form = RegistrationForm::new(
        clients.get_ref().clone(),
        flow.get_ref().clone(),
        Feedback::new(recorder.clone()),
    )
    .with_fields(RegistrationFields {
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
        email: request.email,
        password: request.password,
    });

    let response = match form.submit().await {
        RegistrationOutcome::Registered { user, .. } => {
            recorder.respond(StatusCode::OK, "registered", None, Some(user))
        }
        RegistrationOutcome::Rejected { error, .. } => {
            let fields = form.fields();
            let snapshot = FormSnapshot {
                first_name: fields.first_name.clone(),
                last_name: fields.last_name.clone(),
                email: fields.email.clone(),
            };
            recorder.respond(error.status_code(), "rejected", Some(snapshot), None)
        }
        RegistrationOutcome::Ignored => {
            recorder.respond(StatusCode::TOO_MANY_REQUESTS, "ignored", None, None)
        }
    };

    Ok(response)
}
