//! Portfolio repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::portfolio::Portfolio;

/// Persistence for VC portfolios, one per VC user.
///
/// Companies and pipeline are written together in a single row update.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Find the VC's portfolio. Returns `None` if it was never opened.
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Portfolio>, DomainError>;

    /// Insert a new portfolio; a no-op if the owner already has one.
    async fn create(&self, portfolio: &Portfolio) -> Result<(), DomainError>;

    /// Overwrite companies and pipeline.
    ///
    /// # Errors
    ///
    /// - `PortfolioNotFound` if no row exists for the owner
    /// - `DatabaseError` on persistence failure
    async fn update(&self, portfolio: &Portfolio) -> Result<(), DomainError>;
}
