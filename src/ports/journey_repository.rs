//! Journey repository port.
//!
//! One journey row per founder. Reads and writes move the whole aggregate;
//! there is no per-step write, so concurrent upserts for the same user are
//! last-write-wins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::Journey;

#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Find the user's journey. Returns `None` if the user has none yet.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journey>, DomainError>;

    /// Insert a new journey.
    ///
    /// Inserting for a user that already has one is a no-op, so two racing
    /// lazy creates both succeed and the first row stays.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, journey: &Journey) -> Result<(), DomainError>;

    /// Overwrite an existing journey's step pointer and step data.
    ///
    /// # Errors
    ///
    /// - `JourneyNotFound` if no row exists for the user
    /// - `DatabaseError` on persistence failure
    async fn update(&self, journey: &Journey) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn JourneyRepository) {}
    }
}
