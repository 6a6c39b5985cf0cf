//! Top-level API router.
//!
//! Nests the founder, advisory, and VC routers under `/api`, adds the public
//! health check, and wraps everything in auth, tracing, CORS, and timeout
//! layers.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::advisory::AdvisoryRouter;
use crate::ports::{
    ConversationRepository, JourneyRepository, PortfolioRepository, SessionValidator,
};

use super::advisory::{advisory_router, AdvisoryAppState};
use super::founder::{founder_router, FounderAppState};
use super::middleware::auth_middleware;
use super::vc::{vc_router, VcAppState};

/// Everything the HTTP layer needs from the outside world.
#[derive(Clone)]
pub struct ApiServices {
    pub journeys: Arc<dyn JourneyRepository>,
    pub portfolios: Arc<dyn PortfolioRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub advisory: Arc<AdvisoryRouter>,
    pub sessions: Arc<dyn SessionValidator>,
}

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "BAT-VC Agentic Studio API",
    })
}

/// Builds the complete application router.
pub fn api_router(services: ApiServices, settings: &HttpSettings) -> Router {
    let founder = founder_router().with_state(FounderAppState::new(
        services.journeys.clone(),
        services.conversations.clone(),
    ));
    let advisory = advisory_router().with_state(AdvisoryAppState::new(
        services.advisory.clone(),
        services.conversations.clone(),
    ));
    let vc = vc_router().with_state(VcAppState::new(
        services.portfolios.clone(),
        services.advisory.clone(),
    ));

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/founder", founder)
        .nest("/api/ai", advisory)
        .nest("/api/vc", vc)
        .layer(middleware::from_fn_with_state(
            services.sessions.clone(),
            auth_middleware,
        ))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
