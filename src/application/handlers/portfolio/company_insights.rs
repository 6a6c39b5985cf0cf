//! Company insight handlers: read stored advisory insights, or run the
//! portfolio agent for a company and store the result on it.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::application::advisory::{AdviceSource, AdvisoryRouter};
use crate::domain::advisory::PortfolioInput;
use crate::domain::foundation::{CompanyId, Timestamp, UserId};
use crate::domain::portfolio::{Company, PortfolioError, UNKNOWN_STAGE};
use crate::ports::PortfolioRepository;

use super::load_existing;

/// Keys read from a company's free-form fields when building agent input.
const METRICS_KEY: &str = "metrics";
const LAST_REVIEW_KEY: &str = "lastReviewDate";

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyInsights {
    pub company: Company,
    pub insights: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct GetCompanyInsightsQuery {
    pub user_id: UserId,
    pub company_id: CompanyId,
}

pub struct GetCompanyInsightsHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl GetCompanyInsightsHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCompanyInsightsQuery) -> Result<CompanyInsights, PortfolioError> {
        let portfolio = load_existing(&self.repository, &query.user_id).await?;
        let company = portfolio
            .company(&query.company_id)
            .cloned()
            .ok_or_else(|| PortfolioError::company_not_found(query.company_id.clone()))?;

        Ok(CompanyInsights {
            insights: company.ai_insights.clone(),
            company,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GenerateCompanyInsightsCommand {
    pub user_id: UserId,
    pub company_id: CompanyId,
}

pub struct GenerateCompanyInsightsHandler {
    repository: Arc<dyn PortfolioRepository>,
    router: Arc<AdvisoryRouter>,
}

impl GenerateCompanyInsightsHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>, router: Arc<AdvisoryRouter>) -> Self {
        Self { repository, router }
    }

    pub async fn handle(
        &self,
        cmd: GenerateCompanyInsightsCommand,
    ) -> Result<CompanyInsights, PortfolioError> {
        let mut portfolio = load_existing(&self.repository, &cmd.user_id).await?;
        let company = portfolio
            .company(&cmd.company_id)
            .ok_or_else(|| PortfolioError::company_not_found(cmd.company_id.clone()))?;

        let input = agent_input(company);
        let advised = self
            .router
            .analyze_portfolio_company(&input, Some(&cmd.user_id))
            .await;
        let insights = serde_json::to_value(&advised.value)
            .map_err(|e| PortfolioError::infrastructure(format!("failed to encode insights: {}", e)))?;

        portfolio.record_insights(&cmd.company_id, insights, Timestamp::now())?;
        self.repository.update(&portfolio).await?;

        info!(
            user_id = %cmd.user_id,
            company_id = %cmd.company_id,
            fallback = advised.source == AdviceSource::Fallback,
            "Company insights generated"
        );

        let company = portfolio
            .company(&cmd.company_id)
            .cloned()
            .ok_or_else(|| PortfolioError::company_not_found(cmd.company_id.clone()))?;
        Ok(CompanyInsights {
            insights: company.ai_insights.clone(),
            company,
        })
    }
}

fn agent_input(company: &Company) -> PortfolioInput {
    PortfolioInput {
        company_name: company
            .name
            .clone()
            .unwrap_or_else(|| company.id.to_string()),
        stage: company
            .stage
            .clone()
            .unwrap_or_else(|| UNKNOWN_STAGE.to_string()),
        metrics_data: company
            .extra
            .get(METRICS_KEY)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(Map::new),
        last_review_date: company
            .extra
            .get(LAST_REVIEW_KEY)
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioRepository;
    use crate::domain::portfolio::Portfolio;
    use serde_json::json;

    fn owner() -> UserId {
        UserId::new("vc-1").unwrap()
    }

    fn acme_id() -> CompanyId {
        CompanyId::new("acme").unwrap()
    }

    async fn seeded(metrics: Value) -> Arc<InMemoryPortfolioRepository> {
        let repo = Arc::new(InMemoryPortfolioRepository::new());
        let mut company = Company::new(acme_id());
        company.name = Some("Acme".to_string());
        company.stage = Some("Seed".to_string());
        company.extra.insert(METRICS_KEY.to_string(), metrics);
        let mut portfolio = Portfolio::open(owner());
        portfolio.add_company(company, Timestamp::now()).unwrap();
        repo.create(&portfolio).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn generate_stores_fallback_insights() {
        let repo = seeded(json!({"retentionRate": 45, "churnRate": 3, "ltv": 3000, "cac": 500, "revenue": 20000})).await;
        let handler =
            GenerateCompanyInsightsHandler::new(repo.clone(), Arc::new(AdvisoryRouter::fallback_only()));

        let result = handler
            .handle(GenerateCompanyInsightsCommand { user_id: owner(), company_id: acme_id() })
            .await
            .unwrap();

        let insights = result.insights.unwrap();
        assert_eq!(insights["healthScore"], 85);
        assert_eq!(insights["followOnRecommendation"], "Yes");

        let stored = GetCompanyInsightsHandler::new(repo)
            .handle(GetCompanyInsightsQuery { user_id: owner(), company_id: acme_id() })
            .await
            .unwrap();
        assert_eq!(stored.insights, Some(insights));
    }

    #[tokio::test]
    async fn read_before_generate_returns_none() {
        let handler = GetCompanyInsightsHandler::new(seeded(json!({})).await);

        let result = handler
            .handle(GetCompanyInsightsQuery { user_id: owner(), company_id: acme_id() })
            .await
            .unwrap();

        assert!(result.insights.is_none());
        assert_eq!(result.company.name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() {
        let handler = GetCompanyInsightsHandler::new(seeded(json!({})).await);

        let err = handler
            .handle(GetCompanyInsightsQuery {
                user_id: owner(),
                company_id: CompanyId::new("ghost").unwrap(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PortfolioError::CompanyNotFound(_)));
    }

    #[test]
    fn agent_input_defaults_missing_fields() {
        let input = agent_input(&Company::new(acme_id()));

        assert_eq!(input.company_name, "acme");
        assert_eq!(input.stage, "unknown");
        assert!(input.metrics_data.is_empty());
        assert!(input.last_review_date.is_none());
    }
}
