//! HTTP adapter for VC portfolio management.
//!
//! # Endpoints
//!
//! - `GET /api/vc/portfolio` - Portfolio (opened on first read)
//! - `GET /api/vc/pipeline` - Deal pipeline
//! - `POST /api/vc/pipeline/move` - Move a company between buckets
//! - `GET /api/vc/analytics` - Summary statistics
//! - `POST /api/vc/companies` - Add a company
//! - `GET /api/vc/ai-insights/:companyId` - Stored insights for a company
//! - `POST /api/vc/ai-insights/:companyId` - Regenerate insights for a company

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::VcAppState;
pub use routes::vc_router;
