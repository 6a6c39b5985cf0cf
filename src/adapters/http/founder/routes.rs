//! Route configuration for founder endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_journey, get_step, get_step_assistance, update_step, FounderAppState};

/// Routes relative to `/api/founder`.
pub fn founder_router() -> Router<FounderAppState> {
    Router::new()
        .route("/journey", get(get_journey))
        .route("/journey/step/:step_number", get(get_step).put(update_step))
        .route("/journey/step/:step_number/ai-assist", get(get_step_assistance))
}
