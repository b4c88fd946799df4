//! 사용자 피드백 모델
//!
//! 화면 컨트롤러가 내보내는 알림(토스트)과 내비게이션 대상입니다.

use std::time::Duration;

use serde::Serialize;

/// 화면 간 이동 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    /// `/`
    Home,
    /// `/login`
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopCenter,
    BottomCenter,
}

/// 사용자에게 보여줄 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub position: ToastPosition,
    /// `None`이면 알림 구현체의 기본 표시 시간을 사용합니다.
    pub auto_close: Option<Duration>,
}

impl Notification {
    /// 성공 알림 (기본 위치: 상단 중앙)
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            position: ToastPosition::TopCenter,
            auto_close: None,
        }
    }

    /// 에러 알림 (기본 위치: 하단 중앙)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            position: ToastPosition::BottomCenter,
            auto_close: None,
        }
    }

    pub fn auto_close(mut self, duration: Duration) -> Self {
        self.auto_close = Some(duration);
        self
    }
}
