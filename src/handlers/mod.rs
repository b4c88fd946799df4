//! # HTTP Request Handlers Module
//!
//! 화면 컨트롤러를 HTTP로 노출하는 핸들러 함수들입니다.
//! 요청마다 컨트롤러와 [`ScreenRecorder`](crate::screens::ScreenRecorder)를 새로 만들어
//! 한 번 구동하고, 수집된 알림/화면 이동을 응답으로 돌려줍니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (회원가입 화면, Google 로그인 버튼)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Screens - 폼 상태, 로딩 플래그, 피드백            ← Controller Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 아이덴티티 프로바이더, 프로필 동기화     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 프로필 문서 접근                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공유 상태
//!
//! 핸들러는 `web::Data`로 주입된 다음 값만 사용합니다.
//!
//! - [`AuthClients`](crate::screens::AuthClients) - 아이덴티티/프로필 클라이언트
//! - [`FlowConfig`](crate::config::FlowConfig) - 화면 이동 지연 등
//! - [`GoogleAuthService`](crate::services::auth::GoogleAuthService) - 인증 URL, state 검증
//!
//! ## 에러 처리
//!
//! 요청 검증 실패는 [`AppError`](crate::errors::AppError)로 반환되어 JSON 에러 응답이 되고,
//! 프로바이더 실패는 화면 응답(`outcome: "rejected" | "failed"`)의 상태 코드로 표현됩니다.

pub mod auth;
pub mod register;
