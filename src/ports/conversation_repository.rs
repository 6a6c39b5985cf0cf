//! Conversation repository port.
//!
//! Rows are keyed by (user, tag) without a uniqueness guarantee; readers
//! always take the most recently created row for the pair.

use async_trait::async_trait;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Most recently created conversation for the pair, if any.
    async fn find_latest(
        &self,
        user_id: &UserId,
        tag: &str,
    ) -> Result<Option<Conversation>, DomainError>;

    /// Insert a new conversation row.
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Overwrite transcript and context of an existing row (matched by id).
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the row is gone
    /// - `DatabaseError` on persistence failure
    async fn update(&self, conversation: &Conversation) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ConversationRepository) {}
    }
}
