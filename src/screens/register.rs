//! # 회원가입 폼 컨트롤러
//!
//! 이름, 성, 이메일, 비밀번호를 입력받아 아이덴티티 프로바이더에 계정을 생성합니다.
//!
//! ## 제출 플로우
//!
//! ```text
//! submit()
//!   ├─ 진행 중인 제출이 있음 ─────────────► Ignored
//!   ├─ 로딩 플래그 올림
//!   ├─ create_user_with_email_and_password
//!   │    ├─ 성공 ─► 프로필 쓰기 (실패는 로그만)
//!   │    │         ─► 성공 알림, 필드 초기화, 지연 후 /login 이동 ─► Registered
//!   │    └─ 실패 ─► 에러 메시지 매핑, 에러 알림, 필드 유지 ─────► Rejected
//!   └─ 로딩 플래그 내림 (guard drop)
//! ```
//!
//! 비밀번호 강도는 입력할 때마다 다시 계산되지만 제출 여부에는 영향을 주지 않습니다.

use std::time::Duration;

use serde::Serialize;

use crate::config::FlowConfig;
use crate::domain::entities::ProfileDocument;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::{Notification, PasswordStrength, Route};
use crate::errors::AuthError;
use crate::services::profiles::{write_profile, ProfileSync};

use super::{AuthClients, Feedback, LoadingFlag};

pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "🎉 Account created successfully! Welcome to our community!";
pub const EMAIL_IN_USE_MESSAGE: &str =
    "This email is already registered. Please use a different email or sign in.";
pub const WEAK_PASSWORD_MESSAGE: &str = "Password is too weak. Please use at least 6 characters.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

const SUCCESS_AUTO_CLOSE: Duration = Duration::from_secs(4);
const ERROR_AUTO_CLOSE: Duration = Duration::from_secs(5);

/// 폼 입력값
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl RegistrationFields {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
    }
}

/// 제출 결과
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// 계정 생성 성공. 프로필 쓰기 결과는 참고용입니다.
    Registered {
        user: AuthenticatedUser,
        profile: ProfileSync,
    },
    /// 프로바이더가 거부함
    Rejected { error: AuthError, message: String },
    /// 이미 제출이 진행 중이라 무시됨
    Ignored,
}

/// 회원가입 폼 컨트롤러
pub struct RegistrationForm {
    clients: AuthClients,
    flow: FlowConfig,
    feedback: Feedback,
    fields: RegistrationFields,
    strength: PasswordStrength,
    show_password: bool,
    loading: LoadingFlag,
}

impl RegistrationForm {
    pub fn new(clients: AuthClients, flow: FlowConfig, feedback: Feedback) -> Self {
        Self {
            clients,
            flow,
            feedback,
            fields: RegistrationFields::default(),
            strength: PasswordStrength::default(),
            show_password: false,
            loading: LoadingFlag::new(),
        }
    }

    /// 요청 본문 등으로 이미 채워진 입력값을 한 번에 적용합니다.
    pub fn with_fields(mut self, fields: RegistrationFields) -> Self {
        self.strength = PasswordStrength::evaluate(&fields.password);
        self.fields = fields;
        self
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.fields.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.fields.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
    }

    /// 비밀번호를 바꾸고 강도를 즉시 다시 계산합니다.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.fields.password = value.into();
        self.strength = PasswordStrength::evaluate(&self.fields.password);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn fields(&self) -> &RegistrationFields {
        &self.fields
    }

    pub fn password_strength(&self) -> PasswordStrength {
        self.strength
    }

    /// 로딩 플래그 (true인 동안 제출 컨트롤 비활성화)
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// "홈으로" 링크
    pub fn go_home(&self) {
        self.feedback.navigator.navigate(Route::Home);
    }

    /// "Sign in here" 링크
    pub fn go_to_sign_in(&self) {
        self.feedback.navigator.navigate(Route::Login);
    }

    /// 계정 생성을 시도합니다.
    pub async fn submit(&mut self) -> RegistrationOutcome {
        let Some(_guard) = self.loading.try_begin() else {
            log::debug!("회원가입 제출 무시: 이미 진행 중");
            return RegistrationOutcome::Ignored;
        };

        let result = self.clients.identity
            .create_user_with_email_and_password(&self.fields.email, &self.fields.password)
            .await;

        match result {
            Ok(user) => {
                log::info!("회원가입 성공: uid={}", user.uid);

                let profile = ProfileDocument::for_registration(
                    user.email.clone(),
                    &self.fields.first_name,
                    &self.fields.last_name,
                );
                let sync = write_profile(self.clients.profiles.as_ref(), &user.uid, &profile).await;

                self.feedback.notifier.notify(
                    Notification::success(REGISTRATION_SUCCESS_MESSAGE).auto_close(SUCCESS_AUTO_CLOSE),
                );
                self.reset_fields();
                self.feedback
                    .navigator
                    .navigate_after(Route::Login, self.flow.login_redirect_delay);

                RegistrationOutcome::Registered { user, profile: sync }
            }
            Err(error) => {
                log::error!("회원가입 실패 ({}): {}", error.code(), error);

                let message = registration_error_message(&error);
                self.feedback
                    .notifier
                    .notify(Notification::error(message.clone()).auto_close(ERROR_AUTO_CLOSE));

                RegistrationOutcome::Rejected { error, message }
            }
        }
    }

    fn reset_fields(&mut self) {
        self.fields = RegistrationFields::default();
        self.strength = PasswordStrength::default();
    }
}

/// 프로바이더 에러를 사용자 메시지로 바꿉니다.
pub fn registration_error_message(error: &AuthError) -> String {
    match error {
        AuthError::EmailAlreadyInUse => EMAIL_IN_USE_MESSAGE.to_string(),
        AuthError::WeakPassword(_) => WEAK_PASSWORD_MESSAGE.to_string(),
        AuthError::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
        other => {
            let message = other.to_string();
            if message.trim().is_empty() {
                REGISTRATION_FAILED_MESSAGE.to_string()
            } else {
                message
            }
        }
    }
}
