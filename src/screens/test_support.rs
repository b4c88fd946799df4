//! 컨트롤러 테스트용 가짜 포트 구현

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{AuthProvider, GoogleOAuthConfig, IdentityConfig};
use crate::domain::entities::ProfileDocument;
use crate::domain::models::auth::{AuthenticatedUser, OAuthCredential, OAuthRequest};
use crate::domain::models::{Notification, Route};
use crate::errors::{AuthError, StoreError};
use crate::repositories::ProfileStore;
use crate::services::auth::{IdentityProvider, IdentityToolkitClient};

use super::{LoadingFlag, Navigator, Notifier, OAuthPopup, RedirectSource};

pub fn google_user(uid: &str, display_name: Option<&str>) -> AuthenticatedUser {
    AuthenticatedUser {
        uid: uid.to_string(),
        email: Some(format!("{}@gmail.com", uid)),
        display_name: display_name.map(str::to_string),
        photo_url: Some(format!("https://example.com/{}.png", uid)),
        provider: AuthProvider::Google,
    }
}

/// 아무도 듣고 있지 않은 로컬 주소를 가리키는 실제 클라이언트
pub fn offline_identity_client(api_key: &str) -> IdentityToolkitClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    IdentityToolkitClient::new(
        IdentityConfig {
            api_key: api_key.to_string(),
            endpoint: endpoint.clone(),
        },
        GoogleOAuthConfig {
            client_id: "client-123".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:8080/api/v1/auth/google/callback".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: format!("{}/token", endpoint),
            state_secret: "state-secret".to_string(),
            state_ttl_minutes: 10,
        },
    )
}

/// 가짜 아이덴티티 프로바이더
pub struct FakeIdentity {
    sign_up_error: Option<AuthError>,
    sign_in_result: Result<AuthenticatedUser, AuthError>,
    sign_up_calls: Mutex<Vec<(String, String)>>,
    sign_in_calls: Mutex<Vec<OAuthCredential>>,
    observed: Mutex<Option<LoadingFlag>>,
    observed_loading: Mutex<Option<bool>>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self {
            sign_up_error: None,
            sign_in_result: Ok(google_user("g-default", Some("Default User"))),
            sign_up_calls: Mutex::new(Vec::new()),
            sign_in_calls: Mutex::new(Vec::new()),
            observed: Mutex::new(None),
            observed_loading: Mutex::new(None),
        }
    }

    pub fn sign_up_fails(mut self, error: AuthError) -> Self {
        self.sign_up_error = Some(error);
        self
    }

    pub fn google_user(mut self, uid: &str, display_name: Option<&str>) -> Self {
        self.sign_in_result = Ok(google_user(uid, display_name));
        self
    }

    pub fn sign_in_fails(mut self, error: AuthError) -> Self {
        self.sign_in_result = Err(error);
        self
    }

    /// 호출 시점의 로딩 플래그 값을 기록합니다.
    pub fn observe(&self, flag: LoadingFlag) {
        *self.observed.lock().unwrap() = Some(flag);
    }

    pub fn observed_loading(&self) -> Option<bool> {
        *self.observed_loading.lock().unwrap()
    }

    pub fn sign_up_calls(&self) -> Vec<(String, String)> {
        self.sign_up_calls.lock().unwrap().clone()
    }

    pub fn sign_in_calls(&self) -> Vec<OAuthCredential> {
        self.sign_in_calls.lock().unwrap().clone()
    }

    fn record_loading(&self) {
        if let Some(flag) = self.observed.lock().unwrap().as_ref() {
            *self.observed_loading.lock().unwrap() = Some(flag.is_loading());
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.record_loading();
        self.sign_up_calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));

        match &self.sign_up_error {
            Some(error) => Err(error.clone()),
            None => Ok(AuthenticatedUser {
                uid: format!("uid-{}", email),
                email: Some(email.to_string()),
                display_name: None,
                photo_url: None,
                provider: AuthProvider::Password,
            }),
        }
    }

    async fn sign_in_with_credential(
        &self,
        credential: OAuthCredential,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.record_loading();
        self.sign_in_calls.lock().unwrap().push(credential);
        self.sign_in_result.clone()
    }
}

/// 메모리 기반 가짜 프로필 저장소
#[derive(Default)]
pub struct FakeProfileStore {
    documents: Mutex<HashMap<String, ProfileDocument>>,
    writes: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl FakeProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn failing_reads() -> Self {
        Self { fail_reads: true, ..Self::default() }
    }

    /// 쓰기 횟수에 포함되지 않는 사전 데이터
    pub fn insert(&self, uid: &str, profile: ProfileDocument) {
        self.documents.lock().unwrap().insert(uid.to_string(), profile);
    }

    pub fn get_stored(&self, uid: &str) -> Option<ProfileDocument> {
        self.documents.lock().unwrap().get(uid).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for FakeProfileStore {
    async fn get(&self, uid: &str) -> Result<Option<ProfileDocument>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::PermissionDenied("read denied".to_string()));
        }
        Ok(self.get_stored(uid))
    }

    async fn set(&self, uid: &str, profile: &ProfileDocument) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::PermissionDenied("write denied".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.insert(uid, profile.clone());
        Ok(())
    }
}

/// 가짜 OAuth 팝업
pub struct FakePopup {
    result: Result<OAuthCredential, AuthError>,
    requests: Mutex<Vec<OAuthRequest>>,
    observed: Option<LoadingFlag>,
    observed_loading: Mutex<Option<bool>>,
}

impl FakePopup {
    pub fn succeeds(credential: OAuthCredential) -> Self {
        Self::with_result(Ok(credential))
    }

    pub fn fails(error: AuthError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<OAuthCredential, AuthError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
            observed: None,
            observed_loading: Mutex::new(None),
        }
    }

    pub fn observing(mut self, flag: LoadingFlag) -> Self {
        self.observed = Some(flag);
        self
    }

    pub fn requests(&self) -> Vec<OAuthRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn observed_loading(&self) -> Option<bool> {
        *self.observed_loading.lock().unwrap()
    }
}

#[async_trait]
impl OAuthPopup for FakePopup {
    async fn open(&self, request: &OAuthRequest) -> Result<OAuthCredential, AuthError> {
        if let Some(flag) = &self.observed {
            *self.observed_loading.lock().unwrap() = Some(flag.is_loading());
        }
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

/// 가짜 리다이렉트 결과
pub struct FakeRedirect {
    pending: Mutex<Option<OAuthCredential>>,
    takes: AtomicUsize,
}

impl FakeRedirect {
    pub fn pending(credential: OAuthCredential) -> Self {
        Self {
            pending: Mutex::new(Some(credential)),
            takes: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            pending: Mutex::new(None),
            takes: AtomicUsize::new(0),
        }
    }

    pub fn take_count(&self) -> usize {
        self.takes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RedirectSource for FakeRedirect {
    async fn take_redirect_result(&self) -> Result<Option<OAuthCredential>, AuthError> {
        self.takes.fetch_add(1, Ordering::SeqCst);
        Ok(self.pending.lock().unwrap().take())
    }
}

/// 알림과 화면 이동을 기록하는 피드백 포트
#[derive(Default)]
pub struct RecordingFeedback {
    notifications: Mutex<Vec<Notification>>,
    navigations: Mutex<Vec<(Route, Duration)>>,
}

impl RecordingFeedback {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<(Route, Duration)> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Notifier for RecordingFeedback {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl Navigator for RecordingFeedback {
    fn navigate_after(&self, route: Route, delay: Duration) {
        self.navigations.lock().unwrap().push((route, delay));
    }
}
