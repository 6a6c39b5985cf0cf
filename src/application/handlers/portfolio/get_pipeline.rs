//! GetPipelineHandler - the deal pipeline, empty when no portfolio exists.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::portfolio::{Pipeline, PortfolioError};
use crate::ports::PortfolioRepository;

#[derive(Debug, Clone)]
pub struct GetPipelineQuery {
    pub user_id: UserId,
}

pub struct GetPipelineHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl GetPipelineHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPipelineQuery) -> Result<Pipeline, PortfolioError> {
        Ok(self
            .repository
            .find_by_owner(&query.user_id)
            .await?
            .map(|p| p.pipeline().clone())
            .unwrap_or_default())
    }
}
