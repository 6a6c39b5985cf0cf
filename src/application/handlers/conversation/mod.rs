//! Conversation store and chat handlers.

mod conversation_store;
mod send_chat_message;

pub use conversation_store::ConversationStore;
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult};
