//! HTTP adapter for the advisory agents and chat.
//!
//! Every advisory endpoint answers with the same shape whether the
//! generative backend or the fallback generator produced it.
//!
//! # Endpoints
//!
//! - `POST /api/ai/validate-idea`
//! - `POST /api/ai/analyze-market`
//! - `POST /api/ai/recommend-tools`
//! - `POST /api/ai/mvp-guidance`
//! - `POST /api/ai/generate-gtm`
//! - `POST /api/ai/analyze-metrics`
//! - `POST /api/ai/analyze-portfolio` (VC only)
//! - `POST /api/ai/chat`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AdvisoryAppState;
pub use routes::advisory_router;
