//! PostgreSQL implementation of PortfolioRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::portfolio::{Company, Pipeline, Portfolio};
use crate::ports::PortfolioRepository;

use super::{db_error, decode_error};

#[derive(Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Portfolio>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT vc_user_id, companies, pipeline, created_at, updated_at
            FROM vc_portfolios
            WHERE vc_user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch portfolio", e))?;

        row.map(row_to_portfolio).transpose()
    }

    async fn create(&self, portfolio: &Portfolio) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO vc_portfolios (vc_user_id, companies, pipeline, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (vc_user_id) DO NOTHING
            "#,
        )
        .bind(portfolio.user_id().as_str())
        .bind(Json(portfolio.companies()))
        .bind(Json(portfolio.pipeline()))
        .bind(*portfolio.created_at().as_datetime())
        .bind(*portfolio.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert portfolio", e))?;

        Ok(())
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE vc_portfolios SET
                companies = $2,
                pipeline = $3,
                updated_at = $4
            WHERE vc_user_id = $1
            "#,
        )
        .bind(portfolio.user_id().as_str())
        .bind(Json(portfolio.companies()))
        .bind(Json(portfolio.pipeline()))
        .bind(*portfolio.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update portfolio", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PortfolioNotFound,
                format!("Portfolio not found for user {}", portfolio.user_id()),
            ));
        }

        Ok(())
    }
}

fn row_to_portfolio(row: PgRow) -> Result<Portfolio, DomainError> {
    let user_id: String = row
        .try_get("vc_user_id")
        .map_err(|e| decode_error("vc_user_id", e))?;
    let companies: Option<Json<Vec<Company>>> = row
        .try_get("companies")
        .map_err(|e| decode_error("companies", e))?;
    let pipeline: Option<Json<Pipeline>> = row
        .try_get("pipeline")
        .map_err(|e| decode_error("pipeline", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| decode_error("created_at", e))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| decode_error("updated_at", e))?;

    Ok(Portfolio::reconstitute(
        UserId::new(user_id).map_err(|e| decode_error("vc_user_id", e))?,
        companies.map(|Json(c)| c).unwrap_or_default(),
        pipeline.map(|Json(p)| p).unwrap_or_default(),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
