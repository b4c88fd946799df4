//! HTTP 응답 DTO

use serde::Serialize;

use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::{
    Notification, NotificationKind, PasswordStrength, Route, StrengthLevel, StrengthTone,
    ToastPosition,
};

/// Google OAuth 인증 URL 응답
#[derive(Debug, Serialize)]
pub struct AuthorizeUrlResponse {
    pub authorize_url: String,
    pub state: String,
}

/// 비밀번호 강도 미리보기 응답
#[derive(Debug, Serialize)]
pub struct PasswordStrengthResponse {
    pub score: u8,
    pub level: StrengthLevel,
    pub label: &'static str,
    pub tone: StrengthTone,
    pub fill_percent: u8,
}

impl From<PasswordStrength> for PasswordStrengthResponse {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            score: strength.score(),
            level: strength.level(),
            label: strength.label(),
            tone: strength.tone(),
            fill_percent: strength.fill_percent(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub kind: NotificationKind,
    pub message: String,
    pub position: ToastPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_ms: Option<u64>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            kind: notification.kind,
            message: notification.message,
            position: notification.position,
            auto_close_ms: notification.auto_close.map(|d| d.as_millis() as u64),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavigationDto {
    pub route: &'static str,
    pub delay_ms: u64,
}

impl NavigationDto {
    pub fn new(route: Route, delay_ms: u64) -> Self {
        Self {
            route: route.path(),
            delay_ms,
        }
    }
}

/// 회원가입 실패 시 유지되는 입력값 (비밀번호 제외)
#[derive(Debug, Serialize)]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// 화면 컨트롤러 한 번의 실행 결과
#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    /// `registered`, `rejected`, `signed_in`, `cancelled`, `failed`, `no_pending_result`, `ignored`
    pub outcome: &'static str,
    pub notifications: Vec<NotificationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthenticatedUser>,
}
