//! PostgreSQL implementation of ConversationRepository.
//!
//! `ai_conversations` has no unique key on (user_id, journey_step); the
//! newest row by `created_at` is the live one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::conversation::{Conversation, Turn};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::ConversationRepository;

use super::{db_error, decode_error};

#[derive(Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn find_latest(
        &self,
        user_id: &UserId,
        tag: &str,
    ) -> Result<Option<Conversation>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, journey_step, messages, context, created_at, updated_at
            FROM ai_conversations
            WHERE user_id = $1 AND journey_step = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(tag)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch conversation", e))?;

        row.map(row_to_conversation).transpose()
    }

    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ai_conversations (
                id, user_id, journey_step, messages, context, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*conversation.id().as_uuid())
        .bind(conversation.user_id().as_str())
        .bind(conversation.tag())
        .bind(Json(conversation.turns()))
        .bind(Json(conversation.context()))
        .bind(*conversation.created_at().as_datetime())
        .bind(*conversation.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert conversation", e))?;

        Ok(())
    }

    async fn update(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE ai_conversations SET
                messages = $2,
                context = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(*conversation.id().as_uuid())
        .bind(Json(conversation.turns()))
        .bind(Json(conversation.context()))
        .bind(*conversation.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update conversation", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", conversation.id()),
            ));
        }

        Ok(())
    }
}

fn row_to_conversation(row: PgRow) -> Result<Conversation, DomainError> {
    let id: Uuid = row.try_get("id").map_err(|e| decode_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| decode_error("user_id", e))?;
    let tag: String = row
        .try_get("journey_step")
        .map_err(|e| decode_error("journey_step", e))?;
    let turns: Option<Json<Vec<Turn>>> = row
        .try_get("messages")
        .map_err(|e| decode_error("messages", e))?;
    let context: Option<Json<Map<String, Value>>> = row
        .try_get("context")
        .map_err(|e| decode_error("context", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| decode_error("created_at", e))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| decode_error("updated_at", e))?;

    Ok(Conversation::reconstitute(
        ConversationId::from_uuid(id),
        UserId::new(user_id).map_err(|e| decode_error("user_id", e))?,
        tag,
        turns.map(|Json(t)| t).unwrap_or_default(),
        context.map(|Json(c)| c).unwrap_or_default(),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
