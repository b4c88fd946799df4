//! 인증 포털 백엔드
//!
//! 회원가입 폼과 Google 로그인 컨트롤을 UI 없이 구동하는 화면 컨트롤러와,
//! 이를 브라우저에 노출하는 Actix-web HTTP 서버입니다.
//! 인증은 관리형 아이덴티티 프로바이더에, 프로필 문서는 MongoDB에 위임합니다.
//!
//! # Features
//!
//! - **회원가입**: 이메일/비밀번호 계정 생성, 비밀번호 강도 미리보기
//! - **Google 로그인**: 팝업/리다이렉트 OAuth 2.0, 서명된 state 검증
//! - **프로필 문서**: 베스트 에포트 쓰기 (실패해도 인증은 성공)
//! - **사용자 피드백**: 알림(토스트)과 화면 이동을 응답으로 전달
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, OAuth 결과 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Screens     │ ← 폼 상태, 로딩 플래그, 알림/이동
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 아이덴티티 프로바이더, 프로필 동기화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 프로필 문서 액세스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_portal::screens::{AuthClients, Feedback, RegistrationForm, ScreenRecorder};
//!
//! let clients = AuthClients::new(identity, profiles);
//! let recorder = Arc::new(ScreenRecorder::new());
//! let mut form = RegistrationForm::new(clients, config.flow.clone(), Feedback::new(recorder.clone()));
//!
//! form.set_email("new@x.com");
//! form.set_password("Abc12345!");
//! let outcome = form.submit().await;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod screens;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
