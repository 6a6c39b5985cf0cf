//! Request and response bodies for advisory endpoints.
//!
//! Requests are lenient: every field is optional on the wire and required
//! ones are checked when the domain input is built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::advisory::{
    AdvisoryError, GtmInput, IdeaInput, MarketInput, MvpInput, PortfolioInput, ToolInput,
};
use crate::domain::conversation::Turn;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateIdeaRequest {
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub unique_value: Option<String>,
}

impl TryFrom<ValidateIdeaRequest> for IdeaInput {
    type Error = AdvisoryError;

    fn try_from(req: ValidateIdeaRequest) -> Result<Self, Self::Error> {
        IdeaInput::new(req.problem_statement, req.target_audience, req.unique_value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeMarketRequest {
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub industry: Option<String>,
}

impl TryFrom<AnalyzeMarketRequest> for MarketInput {
    type Error = AdvisoryError;

    fn try_from(req: AnalyzeMarketRequest) -> Result<Self, Self::Error> {
        MarketInput::new(req.problem_statement, req.target_audience, req.industry)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendToolsRequest {
    pub industry: Option<String>,
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub features: Option<Vec<Value>>,
}

impl From<RecommendToolsRequest> for ToolInput {
    fn from(req: RecommendToolsRequest) -> Self {
        ToolInput::new(
            req.industry,
            req.problem_statement,
            req.target_audience,
            req.features.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MvpGuidanceRequest {
    pub problem_statement: Option<String>,
    pub target_audience: Option<String>,
    pub timeline: Option<String>,
    pub proposed_features: Option<Vec<Value>>,
}

impl From<MvpGuidanceRequest> for MvpInput {
    fn from(req: MvpGuidanceRequest) -> Self {
        MvpInput::new(
            req.problem_statement,
            req.target_audience,
            req.timeline,
            req.proposed_features.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateGtmRequest {
    pub product_description: Option<String>,
    pub target_audience: Option<String>,
    pub marketing_budget: Option<String>,
    pub launch_timeline: Option<String>,
}

impl From<GenerateGtmRequest> for GtmInput {
    fn from(req: GenerateGtmRequest) -> Self {
        GtmInput::new(
            req.product_description,
            req.target_audience,
            req.marketing_budget,
            req.launch_timeline,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzePortfolioRequest {
    pub company_name: Option<String>,
    pub stage: Option<String>,
    pub metrics_data: Option<Map<String, Value>>,
    pub last_review_date: Option<String>,
}

impl TryFrom<AnalyzePortfolioRequest> for PortfolioInput {
    type Error = AdvisoryError;

    fn try_from(req: AnalyzePortfolioRequest) -> Result<Self, Self::Error> {
        PortfolioInput::new(
            req.company_name,
            req.stage,
            req.metrics_data.unwrap_or_default(),
            req.last_review_date,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Conversation tag; `general` when absent.
    pub journey_step: Option<String>,
    pub context: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub conversation_history: Vec<Turn>,
}
