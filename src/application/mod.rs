//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Journey, conversation, and portfolio handlers live under `handlers`; the
//! backend-or-fallback advisory routing lives under `advisory`.

pub mod advisory;
pub mod handlers;

pub use advisory::{AdviceSource, Advised, AdvisoryRouter, AdvisorySettings};
