//! Route configuration for VC endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_company, generate_insights, get_analytics, get_insights, get_pipeline, get_portfolio,
    move_company, VcAppState,
};

/// Routes relative to `/api/vc`.
pub fn vc_router() -> Router<VcAppState> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/pipeline", get(get_pipeline))
        .route("/pipeline/move", post(move_company))
        .route("/analytics", get(get_analytics))
        .route("/companies", post(add_company))
        .route(
            "/ai-insights/:company_id",
            get(get_insights).post(generate_insights),
        )
}
