//! GetAnalyticsHandler - summary statistics over a VC's portfolio.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::portfolio::{PortfolioAnalytics, PortfolioError};
use crate::ports::PortfolioRepository;

#[derive(Debug, Clone)]
pub struct GetAnalyticsQuery {
    pub user_id: UserId,
}

pub struct GetAnalyticsHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl GetAnalyticsHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAnalyticsQuery) -> Result<PortfolioAnalytics, PortfolioError> {
        Ok(match self.repository.find_by_owner(&query.user_id).await? {
            Some(portfolio) => PortfolioAnalytics::compute(&portfolio),
            None => PortfolioAnalytics::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioRepository;
    use crate::domain::foundation::{CompanyId, Timestamp};
    use crate::domain::portfolio::{Company, Portfolio};

    fn owner() -> UserId {
        UserId::new("vc-1").unwrap()
    }

    #[tokio::test]
    async fn no_portfolio_gives_empty_analytics() {
        let handler = GetAnalyticsHandler::new(Arc::new(InMemoryPortfolioRepository::new()));

        let analytics = handler.handle(GetAnalyticsQuery { user_id: owner() }).await.unwrap();

        assert_eq!(analytics, PortfolioAnalytics::empty());
        assert_eq!(analytics.average_health_score, 0.0);
    }

    #[tokio::test]
    async fn computes_over_stored_companies() {
        let repo = Arc::new(InMemoryPortfolioRepository::new());
        let mut portfolio = Portfolio::open(owner());
        for (id, investment, score) in [("a", 100_000.0, 80.0), ("b", 50_000.0, 60.0)] {
            let mut company = Company::new(CompanyId::new(id).unwrap());
            company.investment = Some(investment);
            company.health_score = Some(score);
            company.stage = Some("Seed".to_string());
            portfolio.add_company(company, Timestamp::now()).unwrap();
        }
        repo.create(&portfolio).await.unwrap();

        let analytics = GetAnalyticsHandler::new(repo)
            .handle(GetAnalyticsQuery { user_id: owner() })
            .await
            .unwrap();

        assert_eq!(analytics.total_companies, 2);
        assert_eq!(analytics.total_invested, 150_000.0);
        assert_eq!(analytics.average_health_score, 70.0);
        assert_eq!(analytics.pipeline_counts.applicants, 2);
        assert_eq!(analytics.stage_distribution["Seed"], 2);
    }
}
