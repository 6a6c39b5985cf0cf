//! Portfolio command and query handlers.

mod add_company;
mod company_insights;
mod get_analytics;
mod get_pipeline;
mod get_portfolio;
mod move_pipeline_entry;

pub use add_company::{AddCompanyCommand, AddCompanyHandler};
pub use company_insights::{
    CompanyInsights, GenerateCompanyInsightsCommand, GenerateCompanyInsightsHandler,
    GetCompanyInsightsHandler, GetCompanyInsightsQuery,
};
pub use get_analytics::{GetAnalyticsHandler, GetAnalyticsQuery};
pub use get_pipeline::{GetPipelineHandler, GetPipelineQuery};
pub use get_portfolio::{GetPortfolioHandler, GetPortfolioQuery};
pub use move_pipeline_entry::{MovePipelineEntryCommand, MovePipelineEntryHandler};

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::portfolio::{Portfolio, PortfolioError};
use crate::ports::PortfolioRepository;

/// Loads the owner's portfolio, failing `PortfolioNotFound` when absent.
pub(crate) async fn load_existing(
    repository: &Arc<dyn PortfolioRepository>,
    user_id: &UserId,
) -> Result<Portfolio, PortfolioError> {
    repository
        .find_by_owner(user_id)
        .await?
        .ok_or_else(|| PortfolioError::portfolio_not_found(user_id.clone()))
}

/// Loads the owner's portfolio, opening an empty one on first access.
pub(crate) async fn load_or_open(
    repository: &Arc<dyn PortfolioRepository>,
    user_id: &UserId,
) -> Result<Portfolio, PortfolioError> {
    if let Some(portfolio) = repository.find_by_owner(user_id).await? {
        return Ok(portfolio);
    }

    let portfolio = Portfolio::open(user_id.clone());
    repository.create(&portfolio).await?;
    tracing::info!(user_id = %user_id, "Portfolio opened");

    Ok(repository.find_by_owner(user_id).await?.unwrap_or(portfolio))
}
