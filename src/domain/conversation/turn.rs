//! Transcript turns.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp};

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One immutable entry in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: Timestamp,
}

impl Turn {
    /// Creates a turn, rejecting blank content.
    pub fn new(
        role: TurnRole,
        content: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation("content", "Turn content cannot be empty"));
        }
        Ok(Self {
            role,
            content,
            timestamp,
        })
    }

    pub fn user(content: impl Into<String>, timestamp: Timestamp) -> Result<Self, DomainError> {
        Self::new(TurnRole::User, content, timestamp)
    }

    pub fn assistant(
        content: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        Self::new(TurnRole::Assistant, content, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_blank_content() {
        assert!(Turn::user("  ", Timestamp::now()).is_err());
    }

    #[test]
    fn serializes_role_content_timestamp() {
        let turn = Turn::assistant("Hello", Timestamp::now()).unwrap();
        let value = serde_json::to_value(&turn).unwrap();

        assert_eq!(value["role"], json!("assistant"));
        assert_eq!(value["content"], json!("Hello"));
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn deserializes_stored_turn() {
        let turn: Turn = serde_json::from_value(json!({
            "role": "user",
            "content": "How do I validate?",
            "timestamp": "2024-03-01T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(turn.role, TurnRole::User);
    }
}
