//! Portfolio summary statistics.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Pipeline, PipelineStage, Portfolio};

/// Stage label used for companies with no stage.
pub const UNKNOWN_STAGE: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCounts {
    pub applicants: usize,
    pub under_review: usize,
    pub due_diligence: usize,
    pub invested: usize,
}

impl From<&Pipeline> for PipelineCounts {
    fn from(pipeline: &Pipeline) -> Self {
        Self {
            applicants: pipeline.len(PipelineStage::Applicants),
            under_review: pipeline.len(PipelineStage::UnderReview),
            due_diligence: pipeline.len(PipelineStage::DueDiligence),
            invested: pipeline.len(PipelineStage::Invested),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    pub total_companies: usize,
    pub total_invested: f64,
    pub average_health_score: f64,
    pub pipeline_counts: PipelineCounts,
    pub stage_distribution: BTreeMap<String, usize>,
}

impl PortfolioAnalytics {
    /// All-zero analytics for a VC without a portfolio.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn compute(portfolio: &Portfolio) -> Self {
        let companies = portfolio.companies();
        let total_invested = companies.iter().filter_map(|c| c.investment).sum();
        let average_health_score = if companies.is_empty() {
            0.0
        } else {
            companies
                .iter()
                .map(|c| c.health_score.unwrap_or(0.0))
                .sum::<f64>()
                / companies.len() as f64
        };

        let mut stage_distribution = BTreeMap::new();
        for company in companies {
            let stage = company
                .stage
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_STAGE);
            *stage_distribution.entry(stage.to_string()).or_insert(0) += 1;
        }

        Self {
            total_companies: companies.len(),
            total_invested,
            average_health_score,
            pipeline_counts: PipelineCounts::from(portfolio.pipeline()),
            stage_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CompanyId, Timestamp, UserId};
    use crate::domain::portfolio::Company;
    use serde_json::json;

    fn company(id: &str, stage: Option<&str>, investment: Option<f64>, health: Option<f64>) -> Company {
        let mut c = Company::new(CompanyId::new(id).unwrap());
        c.stage = stage.map(str::to_string);
        c.investment = investment;
        c.health_score = health;
        c
    }

    #[test]
    fn empty_portfolio_yields_zeros() {
        let portfolio = Portfolio::open(UserId::new("vc").unwrap());
        let analytics = PortfolioAnalytics::compute(&portfolio);

        assert_eq!(analytics.total_companies, 0);
        assert_eq!(analytics.total_invested, 0.0);
        assert_eq!(analytics.average_health_score, 0.0);
        assert!(analytics.stage_distribution.is_empty());
        assert_eq!(analytics, PortfolioAnalytics::empty());
    }

    #[test]
    fn sums_and_averages_with_missing_fields_as_zero() {
        let mut portfolio = Portfolio::open(UserId::new("vc").unwrap());
        for c in [
            company("a", Some("Seed"), Some(100_000.0), Some(80.0)),
            company("b", Some("Seed"), None, Some(60.0)),
            company("c", None, Some(50_000.0), None),
        ] {
            portfolio.add_company(c, Timestamp::now()).unwrap();
        }

        let analytics = PortfolioAnalytics::compute(&portfolio);
        assert_eq!(analytics.total_companies, 3);
        assert_eq!(analytics.total_invested, 150_000.0);
        assert!((analytics.average_health_score - 140.0 / 3.0).abs() < 1e-9);
        assert_eq!(analytics.stage_distribution["Seed"], 2);
        assert_eq!(analytics.stage_distribution[UNKNOWN_STAGE], 1);
        assert_eq!(analytics.pipeline_counts.applicants, 3);
    }

    #[test]
    fn serializes_camel_case_counts() {
        let value = serde_json::to_value(PortfolioAnalytics::empty()).unwrap();
        assert_eq!(
            value["pipelineCounts"],
            json!({"applicants": 0, "underReview": 0, "dueDiligence": 0, "invested": 0})
        );
        assert_eq!(value["stageDistribution"], json!({}));
    }
}
