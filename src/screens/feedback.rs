//! 사용자 피드백 포트
//!
//! 화면 컨트롤러는 알림과 화면 이동을 직접 수행하지 않고 이 포트에 위임합니다.
//! HTTP 계층에서는 요청마다 [`ScreenRecorder`](super::recorder::ScreenRecorder)가
//! 두 포트를 모두 구현합니다.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{Notification, Route};

/// 알림(토스트) 표시 포트
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 화면 이동 포트
pub trait Navigator: Send + Sync {
    /// 즉시 이동합니다.
    fn navigate(&self, route: Route) {
        self.navigate_after(route, Duration::ZERO);
    }

    /// `delay` 후에 이동합니다.
    fn navigate_after(&self, route: Route, delay: Duration);
}

/// 컨트롤러에 전달되는 피드백 포트 묶음
#[derive(Clone)]
pub struct Feedback {
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl Feedback {
    /// 두 포트를 모두 구현하는 하나의 대상으로 묶습니다.
    pub fn new<T>(target: Arc<T>) -> Self
    where
        T: Notifier + Navigator + 'static,
    {
        Self {
            notifier: target.clone(),
            navigator: target,
        }
    }
}
