//! SendChatMessageHandler - answers a chat message and records the exchange.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::application::advisory::{AdviceSource, AdvisoryRouter};
use crate::domain::conversation::{Conversation, ConversationError, GENERAL_TAG, HISTORY_WINDOW};
use crate::domain::foundation::UserId;

use super::ConversationStore;

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: UserId,
    pub message: String,
    /// Journey step tag (`step3`) or `None` for the general conversation.
    pub tag: Option<String>,
    pub context: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub reply: String,
    pub source: AdviceSource,
    /// The conversation after the exchange was appended.
    pub conversation: Conversation,
}

pub struct SendChatMessageHandler {
    store: ConversationStore,
    router: Arc<AdvisoryRouter>,
}

impl SendChatMessageHandler {
    pub fn new(store: ConversationStore, router: Arc<AdvisoryRouter>) -> Self {
        Self { store, router }
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, ConversationError> {
        if cmd.message.trim().is_empty() {
            return Err(ConversationError::validation("message", "Message is required"));
        }
        let tag = cmd
            .tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(GENERAL_TAG);

        let previous = self.store.read_last(&cmd.user_id, tag).await?;
        let history = previous
            .as_ref()
            .map(|c| c.recent_turns(HISTORY_WINDOW))
            .unwrap_or_default();

        let advised = self
            .router
            .chat_reply(&cmd.message, history, Some(&cmd.user_id))
            .await;

        let conversation = self
            .store
            .append_turn(&cmd.user_id, tag, &cmd.message, &advised.value, cmd.context)
            .await?;

        info!(
            user_id = %cmd.user_id,
            tag,
            source = advised.source.as_str(),
            "Chat message answered"
        );

        Ok(SendChatMessageResult {
            reply: advised.value,
            source: advised.source,
            conversation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::memory::InMemoryConversationRepository;
    use crate::application::advisory::AdvisorySettings;
    use crate::ports::MessageRole;

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    fn cmd(message: &str, tag: Option<&str>) -> SendChatMessageCommand {
        SendChatMessageCommand {
            user_id: user(),
            message: message.to_string(),
            tag: tag.map(str::to_string),
            context: Map::new(),
        }
    }

    fn handler_with(router: AdvisoryRouter) -> SendChatMessageHandler {
        let store = ConversationStore::new(Arc::new(InMemoryConversationRepository::new()));
        SendChatMessageHandler::new(store, Arc::new(router))
    }

    #[tokio::test]
    async fn fallback_reply_is_stored_under_general_tag() {
        let handler = handler_with(AdvisoryRouter::fallback_only());

        let result = handler.handle(cmd("How do I find funding?", None)).await.unwrap();

        assert_eq!(result.source, AdviceSource::Fallback);
        assert!(result.reply.contains("When seeking funding"));
        assert_eq!(result.conversation.tag(), GENERAL_TAG);
        assert_eq!(result.conversation.turns().len(), 2);
        assert_eq!(result.conversation.turns()[1].content, result.reply);
    }

    #[tokio::test]
    async fn backend_sees_only_last_ten_turns() {
        let mock = MockAIProvider::new();
        let router = AdvisoryRouter::new(Some(Arc::new(mock.clone())), AdvisorySettings::default());
        let handler = handler_with(router);

        for n in 0..7 {
            handler
                .handle(cmd(&format!("question {}", n), Some("step4")))
                .await
                .unwrap();
        }

        let calls = mock.get_calls();
        let last = calls.last().unwrap();
        // 10 history turns plus the new message
        assert_eq!(last.messages.len(), HISTORY_WINDOW + 1);
        assert_eq!(last.messages[0].content, "question 1");
        assert_eq!(last.messages[HISTORY_WINDOW].role, MessageRole::User);
        assert_eq!(last.messages[HISTORY_WINDOW].content, "question 6");
    }

    #[tokio::test]
    async fn transcript_keeps_every_turn() {
        let handler = handler_with(AdvisoryRouter::fallback_only());

        let mut last = None;
        for n in 0..6 {
            last = Some(handler.handle(cmd(&format!("q{}", n), Some("step2"))).await.unwrap());
        }

        assert_eq!(last.unwrap().conversation.turns().len(), 12);
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let handler = handler_with(AdvisoryRouter::fallback_only());

        let err = handler.handle(cmd("   ", None)).await.unwrap_err();
        assert_eq!(err, ConversationError::validation("message", "Message is required"));
    }
}
