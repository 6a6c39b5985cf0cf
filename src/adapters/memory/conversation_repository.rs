//! In-memory ConversationRepository.
//!
//! Rows live in insertion order; the latest row for a (user, tag) pair is
//! the last one inserted.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::ConversationRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    rows: Arc<RwLock<Vec<Conversation>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, across all users and tags.
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn find_latest(
        &self,
        user_id: &UserId,
        tag: &str,
    ) -> Result<Option<Conversation>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .find(|c| c.user_id() == user_id && c.tag() == tag)
            .cloned())
    }

    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        self.rows.write().await.push(conversation.clone());
        Ok(())
    }

    async fn update(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        let stored = rows
            .iter_mut()
            .find(|c| c.id() == conversation.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ConversationNotFound,
                    format!("Conversation not found: {}", conversation.id()),
                )
            })?;
        *stored = conversation.clone();
        Ok(())
    }
}
