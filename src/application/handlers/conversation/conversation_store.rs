//! ConversationStore - read-last and append-turn over the conversation
//! repository.
//!
//! Append is read-then-write with no uniqueness guard: two first messages
//! racing for the same (user, tag) can both insert, and readers then see
//! only the newer row.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::conversation::{Conversation, ConversationError, Turn};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::ConversationRepository;

#[derive(Clone)]
pub struct ConversationStore {
    repository: Arc<dyn ConversationRepository>,
}

impl ConversationStore {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// Most recent conversation for the pair, if any.
    pub async fn read_last(
        &self,
        user_id: &UserId,
        tag: &str,
    ) -> Result<Option<Conversation>, ConversationError> {
        Ok(self.repository.find_latest(user_id, tag).await?)
    }

    /// Appends a user/assistant exchange, creating the conversation on the
    /// first turn. `context` is merged over the stored context.
    pub async fn append_turn(
        &self,
        user_id: &UserId,
        tag: &str,
        user_text: &str,
        assistant_text: &str,
        context: Map<String, Value>,
    ) -> Result<Conversation, ConversationError> {
        let user_turn = Turn::user(user_text, Timestamp::now())?;
        let assistant_turn = Turn::assistant(assistant_text, Timestamp::now())?;

        match self.repository.find_latest(user_id, tag).await? {
            Some(mut conversation) => {
                conversation.append_exchange(user_turn, assistant_turn, context)?;
                self.repository.update(&conversation).await?;
                debug!(user_id = %user_id, tag, turns = conversation.turns().len(), "Conversation extended");
                Ok(conversation)
            }
            None => {
                let conversation =
                    Conversation::open(user_id.clone(), tag, user_turn, assistant_turn, context);
                self.repository.insert(&conversation).await?;
                debug!(user_id = %user_id, tag, "Conversation opened");
                Ok(conversation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationRepository;
    use crate::domain::conversation::TurnRole;
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    fn store() -> (ConversationStore, Arc<InMemoryConversationRepository>) {
        let repo = Arc::new(InMemoryConversationRepository::new());
        (ConversationStore::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn n_appends_store_2n_turns_in_call_order() {
        let (store, repo) = store();

        for n in 0..4 {
            store
                .append_turn(&user(), "step2", &format!("q{}", n), &format!("a{}", n), Map::new())
                .await
                .unwrap();
        }

        let convo = store.read_last(&user(), "step2").await.unwrap().unwrap();
        let contents: Vec<_> = convo.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["q0", "a0", "q1", "a1", "q2", "a2", "q3", "a3"]);
        assert_eq!(convo.turns()[0].role, TurnRole::User);
        assert_eq!(repo.row_count().await, 1);
    }

    #[tokio::test]
    async fn tags_are_kept_apart() {
        let (store, _) = store();

        store.append_turn(&user(), "step1", "q", "a", Map::new()).await.unwrap();
        store.append_turn(&user(), "general", "q", "a", Map::new()).await.unwrap();

        let step1 = store.read_last(&user(), "step1").await.unwrap().unwrap();
        assert_eq!(step1.turns().len(), 2);
        assert!(store.read_last(&user(), "step9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn context_accumulates_with_newer_values_winning() {
        let (store, _) = store();
        let ctx = |v: Value| v.as_object().cloned().unwrap();

        store
            .append_turn(&user(), "general", "q", "a", ctx(json!({"industry": "health", "stage": "idea"})))
            .await
            .unwrap();
        let convo = store
            .append_turn(&user(), "general", "q", "a", ctx(json!({"stage": "mvp"})))
            .await
            .unwrap();

        assert_eq!(convo.context()["industry"], "health");
        assert_eq!(convo.context()["stage"], "mvp");
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let (store, repo) = store();

        let err = store
            .append_turn(&user(), "general", "  ", "a", Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ConversationError::ValidationFailed { .. }));
        assert_eq!(repo.row_count().await, 0);
    }
}
