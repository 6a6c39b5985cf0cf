//! HTTP adapter for the founder journey.
//!
//! # Endpoints
//!
//! - `GET /api/founder/journey` - Journey (created on first read)
//! - `GET /api/founder/journey/step/:stepNumber` - One step's record
//! - `PUT /api/founder/journey/step/:stepNumber` - Merge fields into a step
//! - `GET /api/founder/journey/step/:stepNumber/ai-assist` - Stored step chat

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FounderAppState;
pub use routes::founder_router;
