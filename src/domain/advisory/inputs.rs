//! Per-domain context records handed to advisory agents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::AdvisoryError;
use super::lenient;

/// Placeholder used in prompts for fields the founder left out.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Default build window when the founder gives none.
pub const DEFAULT_TIMELINE: &str = "8-12 weeks";

/// Default industry label for tool recommendations.
pub const DEFAULT_INDUSTRY: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaInput {
    pub problem_statement: String,
    pub target_audience: String,
    pub unique_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketInput {
    pub problem_statement: String,
    pub target_audience: String,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolInput {
    pub industry: String,
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub features: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MvpInput {
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub timeline: String,
    pub proposed_features: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtmInput {
    pub product_description: Option<String>,
    pub target_audience: Option<String>,
    pub marketing_budget: String,
    pub launch_timeline: String,
}

/// Startup metrics. Every field is optional on the wire and decodes as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsInput {
    #[serde(deserialize_with = "lenient::number")]
    pub total_users: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub active_users: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub retention_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub churn_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub cac: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub ltv: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub burn_rate: f64,
}

impl MetricsInput {
    /// LTV/CAC ratio when both sides are positive.
    pub fn ltv_cac_ratio(&self) -> Option<f64> {
        (self.ltv > 0.0 && self.cac > 0.0).then(|| self.ltv / self.cac)
    }

    /// Share of users active in the last 30 days, as a percentage.
    pub fn activation_rate(&self) -> Option<f64> {
        (self.active_users > 0.0 && self.total_users > 0.0)
            .then(|| self.active_users / self.total_users * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioInput {
    pub company_name: String,
    pub stage: String,
    pub metrics_data: Map<String, Value>,
    pub last_review_date: Option<String>,
}

fn required(field: &str, value: Option<String>) -> Result<String, AdvisoryError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AdvisoryError::missing_field(field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl IdeaInput {
    /// All three fields are required.
    pub fn new(
        problem_statement: Option<String>,
        target_audience: Option<String>,
        unique_value: Option<String>,
    ) -> Result<Self, AdvisoryError> {
        Ok(Self {
            problem_statement: required("problemStatement", problem_statement)?,
            target_audience: required("targetAudience", target_audience)?,
            unique_value: required("uniqueValue", unique_value)?,
        })
    }
}

impl MarketInput {
    pub fn new(
        problem_statement: Option<String>,
        target_audience: Option<String>,
        industry: Option<String>,
    ) -> Result<Self, AdvisoryError> {
        Ok(Self {
            problem_statement: required("problemStatement", problem_statement)?,
            target_audience: required("targetAudience", target_audience)?,
            industry: non_blank(industry),
        })
    }
}

impl ToolInput {
    pub fn new(
        industry: Option<String>,
        problem_statement: Option<String>,
        target_audience: Option<String>,
        features: Vec<Value>,
    ) -> Self {
        Self {
            industry: non_blank(industry).unwrap_or_else(|| DEFAULT_INDUSTRY.to_string()),
            problem_statement: non_blank(problem_statement),
            target_audience: non_blank(target_audience),
            features,
        }
    }
}

impl MvpInput {
    pub fn new(
        problem_statement: Option<String>,
        target_audience: Option<String>,
        timeline: Option<String>,
        proposed_features: Vec<Value>,
    ) -> Self {
        Self {
            problem_statement: non_blank(problem_statement),
            target_audience: non_blank(target_audience),
            timeline: non_blank(timeline).unwrap_or_else(|| DEFAULT_TIMELINE.to_string()),
            proposed_features,
        }
    }
}

impl GtmInput {
    pub fn new(
        product_description: Option<String>,
        target_audience: Option<String>,
        marketing_budget: Option<String>,
        launch_timeline: Option<String>,
    ) -> Self {
        Self {
            product_description: non_blank(product_description),
            target_audience: non_blank(target_audience),
            marketing_budget: non_blank(marketing_budget)
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            launch_timeline: non_blank(launch_timeline)
                .unwrap_or_else(|| DEFAULT_TIMELINE.to_string()),
        }
    }
}

impl PortfolioInput {
    /// `companyName` and `stage` are required.
    pub fn new(
        company_name: Option<String>,
        stage: Option<String>,
        metrics_data: Map<String, Value>,
        last_review_date: Option<String>,
    ) -> Result<Self, AdvisoryError> {
        Ok(Self {
            company_name: required("companyName", company_name)?,
            stage: required("stage", stage)?,
            metrics_data,
            last_review_date: non_blank(last_review_date),
        })
    }
}
