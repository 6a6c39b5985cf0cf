//! GetStepAssistanceHandler - the stored chat for a journey step.

use crate::application::handlers::conversation::ConversationStore;
use crate::domain::conversation::Turn;
use crate::domain::foundation::UserId;
use crate::domain::journey::{resolve_step, JourneyError, JourneyStep};


#[derive(Debug, Clone)]
pub struct GetStepAssistanceQuery {
    pub user_id: UserId,
    pub step_number: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepAssistance {
    pub step: JourneyStep,
    /// Full stored transcript for the step's tag, oldest first.
    pub history: Vec<Turn>,
    pub can_chat: bool,
}

pub struct GetStepAssistanceHandler {
    conversations: ConversationStore,
}

impl GetStepAssistanceHandler {
    pub fn new(conversations: ConversationStore) -> Self {
        Self { conversations }
    }

    pub async fn handle(&self, query: GetStepAssistanceQuery) -> Result<StepAssistance, JourneyError> {
        let step = resolve_step(query.step_number)?;
        let history = self
            .conversations
            .read_last(&query.user_id, &step.conversation_tag())
            .await
            .map_err(|e| JourneyError::infrastructure(e.message()))?
            .map(|c| c.turns().to_vec())
            .unwrap_or_default();

        Ok(StepAssistance {
            step,
            history,
            can_chat: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationRepository;
    use serde_json::Map;
    use std::sync::Arc;

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    #[tokio::test]
    async fn returns_history_for_step_tag() {
        let store = ConversationStore::new(Arc::new(InMemoryConversationRepository::new()));
        store
            .append_turn(&user(), "step4", "Which features first?", "Start small.", Map::new())
            .await
            .unwrap();
        let handler = GetStepAssistanceHandler::new(store);

        let assistance = handler
            .handle(GetStepAssistanceQuery { user_id: user(), step_number: 4 })
            .await
            .unwrap();

        assert_eq!(assistance.step, JourneyStep::Mvp);
        assert_eq!(assistance.history.len(), 2);
        assert!(assistance.can_chat);
    }

    #[tokio::test]
    async fn no_conversation_yields_empty_history() {
        let store = ConversationStore::new(Arc::new(InMemoryConversationRepository::new()));
        let handler = GetStepAssistanceHandler::new(store);

        let assistance = handler
            .handle(GetStepAssistanceQuery { user_id: user(), step_number: 2 })
            .await
            .unwrap();

        assert!(assistance.history.is_empty());
    }
}
