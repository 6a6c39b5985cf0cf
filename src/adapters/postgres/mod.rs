//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! Every aggregate is stored as one row with its semi-structured parts in
//! JSONB columns:
//! - `PostgresJourneyRepository` - `founder_journeys`
//! - `PostgresConversationRepository` - `ai_conversations`
//! - `PostgresPortfolioRepository` - `vc_portfolios`

mod conversation_repository;
mod journey_repository;
mod portfolio_repository;

pub use conversation_repository::PostgresConversationRepository;
pub use journey_repository::PostgresJourneyRepository;
pub use portfolio_repository::PostgresPortfolioRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

fn db_error(action: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, err))
}

fn decode_error(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid stored value in '{}': {}", column, err),
    )
}

#[cfg(test)]
mod tests {
    const SCHEMA: &str = include_str!("../../../migrations/0001_initial.sql");

    #[test]
    fn studio_tables_do_not_require_a_local_user_row() {
        for table in ["founder_journeys", "vc_portfolios", "ai_conversations"] {
            let start = SCHEMA
                .find(&format!("CREATE TABLE IF NOT EXISTS {}", table))
                .unwrap();
            let body = &SCHEMA[start..];
            let end = body.find(");").unwrap();
            assert!(
                !body[..end].contains("REFERENCES users"),
                "{} must not reference users",
                table
            );
        }
    }
}
