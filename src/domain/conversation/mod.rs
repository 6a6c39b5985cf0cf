//! Conversation domain module.
//!
//! Per-(user, tag) chat transcripts with an accumulated context object.

mod aggregate;
mod errors;
mod turn;

pub use aggregate::{Conversation, GENERAL_TAG, HISTORY_WINDOW};
pub use errors::ConversationError;
pub use turn::{Turn, TurnRole};
