//! PostgreSQL implementation of JourneyRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::journey::Journey;
use crate::ports::JourneyRepository;

use super::{db_error, decode_error};

#[derive(Clone)]
pub struct PostgresJourneyRepository {
    pool: PgPool,
}

impl PostgresJourneyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JourneyRepository for PostgresJourneyRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journey>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, current_step, step_data, created_at, updated_at
            FROM founder_journeys
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch journey", e))?;

        row.map(row_to_journey).transpose()
    }

    async fn create(&self, journey: &Journey) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO founder_journeys (user_id, current_step, step_data, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(journey.user_id().as_str())
        .bind(journey.current_step().number())
        .bind(Json(journey.step_data()))
        .bind(*journey.created_at().as_datetime())
        .bind(*journey.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert journey", e))?;

        Ok(())
    }

    async fn update(&self, journey: &Journey) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE founder_journeys SET
                current_step = $2,
                step_data = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(journey.user_id().as_str())
        .bind(journey.current_step().number())
        .bind(Json(journey.step_data()))
        .bind(*journey.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update journey", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::JourneyNotFound,
                format!("Journey not found for user {}", journey.user_id()),
            ));
        }

        Ok(())
    }
}

fn row_to_journey(row: PgRow) -> Result<Journey, DomainError> {
    let user_id: String = row.try_get("user_id").map_err(|e| decode_error("user_id", e))?;
    let current_step: i32 = row
        .try_get("current_step")
        .map_err(|e| decode_error("current_step", e))?;
    let step_data: Option<Json<Map<String, Value>>> = row
        .try_get("step_data")
        .map_err(|e| decode_error("step_data", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| decode_error("created_at", e))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| decode_error("updated_at", e))?;

    let user_id = UserId::new(user_id).map_err(|e| decode_error("user_id", e))?;
    Journey::reconstitute(
        user_id,
        i64::from(current_step),
        step_data.map(|Json(map)| map).unwrap_or_default(),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    )
    .map_err(|e| decode_error("current_step", e))
}
