//! Shared harness for HTTP integration tests.
//!
//! Builds the full API router over in-memory repositories and a mock
//! session validator that knows one founder and one VC token.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use batvc_studio::adapters::auth::MockSessionValidator;
use batvc_studio::adapters::http::{api_router, ApiServices, HttpSettings};
use batvc_studio::adapters::memory::{
    InMemoryConversationRepository, InMemoryJourneyRepository, InMemoryPortfolioRepository,
};
use batvc_studio::application::AdvisoryRouter;
use batvc_studio::domain::foundation::UserId;

pub const FOUNDER: &str = "founder-token";
pub const VC: &str = "vc-token";

/// Router whose advisory calls always use the fallback generators.
pub fn app() -> Router {
    app_with(AdvisoryRouter::fallback_only())
}

pub fn app_with(advisory: AdvisoryRouter) -> Router {
    let sessions = MockSessionValidator::new()
        .with_founder(FOUNDER, UserId::new("founder-1").unwrap())
        .with_vc(VC, UserId::new("vc-1").unwrap());

    api_router(
        ApiServices {
            journeys: Arc::new(InMemoryJourneyRepository::default()),
            portfolios: Arc::new(InMemoryPortfolioRepository::default()),
            conversations: Arc::new(InMemoryConversationRepository::default()),
            advisory: Arc::new(advisory),
            sessions: Arc::new(sessions),
        },
        &HttpSettings::default(),
    )
}

/// Sends one request and decodes the JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put(app: &Router, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}
