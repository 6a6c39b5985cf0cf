//! Conversation aggregate.
//!
//! One conversation exists per (user, tag) pair, where the tag is a journey
//! step (`step3`) or `general`. The transcript is append-only; the context
//! object accumulates keys across turns with newer values winning.
//!
//! # Invariants
//!
//! - Turns are only ever appended, two at a time (user then assistant)
//! - `context` keys are never removed by a merge

use serde_json::{Map, Value};

use crate::domain::foundation::{ConversationId, DomainError, Timestamp, UserId};

use super::Turn;

/// Tag used when a chat is not attached to a journey step.
pub const GENERAL_TAG: &str = "general";

/// Number of most recent turns handed to the generative backend.
pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    id: ConversationId,
    user_id: UserId,
    tag: String,
    turns: Vec<Turn>,
    context: Map<String, Value>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Opens a conversation with its first exchange.
    pub fn open(
        user_id: UserId,
        tag: impl Into<String>,
        user_turn: Turn,
        assistant_turn: Turn,
        context: Map<String, Value>,
    ) -> Self {
        let now = assistant_turn.timestamp;
        Self {
            id: ConversationId::new(),
            user_id,
            tag: tag.into(),
            turns: vec![user_turn, assistant_turn],
            context,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a conversation from persistence (no validation).
    pub fn reconstitute(
        id: ConversationId,
        user_id: UserId,
        tag: String,
        turns: Vec<Turn>,
        context: Map<String, Value>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            tag,
            turns,
            context,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The last `limit` turns, oldest first.
    pub fn recent_turns(&self, limit: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(limit);
        &self.turns[start..]
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a user/assistant exchange and merges `context` over the stored
    /// context.
    pub fn append_exchange(
        &mut self,
        user_turn: Turn,
        assistant_turn: Turn,
        context: Map<String, Value>,
    ) -> Result<(), DomainError> {
        if user_turn.role != super::TurnRole::User
            || assistant_turn.role != super::TurnRole::Assistant
        {
            return Err(DomainError::validation(
                "role",
                "Exchange must be a user turn followed by an assistant turn",
            ));
        }
        self.updated_at = assistant_turn.timestamp;
        self.turns.push(user_turn);
        self.turns.push(assistant_turn);
        self.context.extend(context);
        Ok(())
    }
}
