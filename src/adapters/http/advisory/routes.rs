//! Route configuration for advisory endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{
    analyze_market, analyze_metrics, analyze_portfolio, chat, generate_gtm, mvp_guidance,
    recommend_tools, validate_idea, AdvisoryAppState,
};

/// Routes relative to `/api/ai`.
pub fn advisory_router() -> Router<AdvisoryAppState> {
    Router::new()
        .route("/validate-idea", post(validate_idea))
        .route("/analyze-market", post(analyze_market))
        .route("/recommend-tools", post(recommend_tools))
        .route("/mvp-guidance", post(mvp_guidance))
        .route("/generate-gtm", post(generate_gtm))
        .route("/analyze-metrics", post(analyze_metrics))
        .route("/analyze-portfolio", post(analyze_portfolio))
        .route("/chat", post(chat))
}
