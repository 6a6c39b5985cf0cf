//! Typed response shapes, one per advisory domain.
//!
//! Field names on the wire are camelCase. The same shapes are produced by the
//! generative backend path and by the fallback generators.

use serde::{Deserialize, Serialize};

use super::lenient;

// ════════════════════════════════════════════════════════════════════════════════
// Idea validation
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaValidation {
    #[serde(deserialize_with = "lenient::or_default")]
    pub market_size: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub competitors: Vec<Competitor>,
    #[serde(deserialize_with = "lenient::score")]
    pub feasibility_score: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub explanation: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub risks: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Tool recommendation
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolRecommendations {
    pub tools: Vec<Tool>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tool {
    pub category: String,
    pub name: String,
    pub provider: String,
    pub use_case: String,
    pub integration_complexity: String,
    pub estimated_cost: String,
    #[serde(rename = "expectedROI")]
    pub expected_roi: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// MVP guidance
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MvpGuidance {
    pub must_have_features: Vec<PrioritizedFeature>,
    pub nice_to_have_features: Vec<DeferredFeature>,
    pub tech_stack: Vec<TechChoice>,
    pub timeline: MvpTimeline,
    pub technical_risks: Vec<TechnicalRisk>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritizedFeature {
    pub feature: String,
    #[serde(deserialize_with = "lenient::score")]
    pub priority: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeferredFeature {
    pub feature: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechChoice {
    pub technology: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MvpTimeline {
    #[serde(rename = "weeks1-4")]
    pub weeks_1_to_4: String,
    #[serde(rename = "weeks5-8")]
    pub weeks_5_to_8: String,
    #[serde(rename = "weeks9-12")]
    pub weeks_9_to_12: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalRisk {
    pub risk: String,
    pub mitigation: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Go-to-market
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoToMarketStrategy {
    pub channels: Vec<Channel>,
    pub content_strategy: ContentStrategy,
    pub key_metrics: Vec<String>,
    #[serde(rename = "first90Days")]
    pub first_90_days: LaunchPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    pub name: String,
    #[serde(deserialize_with = "lenient::score")]
    pub priority: u32,
    pub tactics: Vec<String>,
    pub budget_allocation: String,
    pub expected_results: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStrategy {
    pub themes: Vec<String>,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchPlan {
    #[serde(rename = "days1-30")]
    pub days_1_to_30: String,
    #[serde(rename = "days31-60")]
    pub days_31_to_60: String,
    #[serde(rename = "days61-90")]
    pub days_61_to_90: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Metrics analysis
// ════════════════════════════════════════════════════════════════════════════════

/// Traffic-light health rating. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthAssessment {
    Green,
    Yellow,
    Red,
}

impl HealthAssessment {
    /// One notch worse: Green becomes Yellow, anything else becomes Red.
    pub fn escalate(self) -> Self {
        match self {
            HealthAssessment::Green => HealthAssessment::Yellow,
            _ => HealthAssessment::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsAnalysis {
    pub health_assessment: HealthAssessment,
    #[serde(default, deserialize_with = "lenient::score")]
    pub pmf_score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<MetricRecommendation>,
    #[serde(default)]
    pub industry_benchmarks: IndustryBenchmarks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricRecommendation {
    pub metric: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryBenchmarks {
    pub retention_rate: String,
    pub cac: String,
    pub ltv: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Portfolio analysis
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowOnRecommendation {
    Yes,
    Wait,
    No,
}

impl FollowOnRecommendation {
    /// Yes at 75 and above, Wait from 60, No below.
    pub fn from_health_score(score: u32) -> Self {
        if score >= 75 {
            FollowOnRecommendation::Yes
        } else if score >= 60 {
            FollowOnRecommendation::Wait
        } else {
            FollowOnRecommendation::No
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    #[serde(deserialize_with = "lenient::score")]
    pub health_score: u32,
    #[serde(default)]
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    pub follow_on_recommendation: FollowOnRecommendation,
    #[serde(default)]
    pub comparison: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    #[serde(deserialize_with = "lenient::score")]
    pub traction: u32,
    #[serde(deserialize_with = "lenient::score")]
    pub team: u32,
    #[serde(deserialize_with = "lenient::score")]
    pub market: u32,
    #[serde(deserialize_with = "lenient::score")]
    pub financials: u32,
}
