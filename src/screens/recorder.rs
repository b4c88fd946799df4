//! HTTP 요청 단위 피드백 수집기
//!
//! 컨트롤러가 내보낸 알림과 화면 이동을 모았다가 하나의 HTTP 응답으로 변환합니다.
//!
//! | 화면 이동        | 응답                                         |
//! |------------------|----------------------------------------------|
//! | 없음             | 지정한 상태 코드                              |
//! | 즉시             | `303 See Other` + `Location` (리다이렉트 모드) |
//! | 지연             | 지정한 상태 코드 + `Refresh: <초>; url=<경로>` |
//!
//! 리다이렉트 모드는 브라우저가 직접 여는 콜백처럼 최상위 문서 요청에 사용합니다.
//! `fetch`로 호출되는 엔드포인트는 기본 모드를 사용하고 본문의 `navigation`을 따릅니다.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

use crate::domain::dto::{FormSnapshot, NavigationDto, NotificationDto, ScreenResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::{Notification, Route};

use super::{Navigator, Notifier};

#[derive(Debug, Default)]
pub struct ScreenRecorder {
    notifications: Mutex<Vec<Notification>>,
    navigation: Mutex<Option<(Route, Duration)>>,
    redirects: bool,
}

impl ScreenRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 즉시 이동을 `303 See Other`로 응답하는 수집기
    pub fn redirecting() -> Self {
        Self {
            redirects: true,
            ..Self::default()
        }
    }

    /// 수집한 피드백으로 응답을 만듭니다.
    pub fn respond(
        &self,
        status: StatusCode,
        outcome: &'static str,
        form: Option<FormSnapshot>,
        user: Option<AuthenticatedUser>,
    ) -> HttpResponse {
        let notifications = std::mem::take(
            &mut *self.notifications.lock().unwrap_or_else(PoisonError::into_inner),
        );
        let navigation = self.navigation.lock().unwrap_or_else(PoisonError::into_inner).take();

        let mut builder = HttpResponse::build(status);
        if let Some((route, delay)) = navigation {
            if delay.is_zero() {
                if self.redirects {
                    builder.status(StatusCode::SEE_OTHER);
                    builder.insert_header((LOCATION, route.path()));
                }
            } else {
                let seconds = delay.as_millis().div_ceil(1000);
                builder.insert_header(("Refresh", format!("{}; url={}", seconds, route.path())));
            }
        }

        builder.json(ScreenResponse {
            outcome,
            notifications: notifications.into_iter().map(NotificationDto::from).collect(),
            navigation: navigation.map(|(route, delay)| NavigationDto::new(route, delay.as_millis() as u64)),
            form,
            user,
        })
    }
}

impl Notifier for ScreenRecorder {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Navigator for ScreenRecorder {
    /// 마지막 이동 요청만 유지합니다.
    fn navigate_after(&self, route: Route, delay: Duration) {
        *self.navigation.lock().unwrap_or_else(PoisonError::into_inner) = Some((route, delay));
    }
}
