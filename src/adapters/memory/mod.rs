//! In-memory repository adapters.
//!
//! Used by tests and by local runs without a database. Each repository keeps
//! its rows behind a `tokio::sync::RwLock`, so a single call is atomic but a
//! read-modify-write spanning two calls is not, the same as the Postgres
//! adapters.

mod conversation_repository;
mod journey_repository;
mod portfolio_repository;

pub use conversation_repository::InMemoryConversationRepository;
pub use journey_repository::InMemoryJourneyRepository;
pub use portfolio_repository::InMemoryPortfolioRepository;
