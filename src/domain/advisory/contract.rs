//! Response contracts binding each advisory domain to its prompt, its JSON
//! shape, and its deterministic fallback.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The six structured advisory domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryDomain {
    IdeaValidation,
    ToolRecommendation,
    MvpGuidance,
    GoToMarket,
    MetricsAnalysis,
    PortfolioAnalysis,
}

impl AdvisoryDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryDomain::IdeaValidation => "idea_validation",
            AdvisoryDomain::ToolRecommendation => "tool_recommendation",
            AdvisoryDomain::MvpGuidance => "mvp_guidance",
            AdvisoryDomain::GoToMarket => "go_to_market",
            AdvisoryDomain::MetricsAnalysis => "metrics_analysis",
            AdvisoryDomain::PortfolioAnalysis => "portfolio_analysis",
        }
    }
}

impl fmt::Display for AdvisoryDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend output that cannot be turned into the domain's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("response is not valid JSON for this contract: {0}")]
    Malformed(String),

    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),
}

/// A typed advisory response.
///
/// Implementors describe how to ask the backend for themselves, how to tidy
/// what comes back, and how to produce themselves without a backend.
pub trait AdvisoryContract: Sized + Serialize + DeserializeOwned + Send + 'static {
    /// Context record the agent works from.
    type Input: Send + Sync;

    const DOMAIN: AdvisoryDomain;

    /// Persona instruction sent as the system message.
    fn system_prompt() -> &'static str;

    /// Domain prompt describing the input and the JSON shape to return.
    fn user_prompt(input: &Self::Input) -> String;

    /// Deterministic, input-derived response.
    fn fallback(input: &Self::Input) -> Self;

    /// Fills defaults and clamps ranges; rejects output that cannot be repaired.
    fn repair(self) -> Result<Self, ContractViolation>;

    /// Parses raw backend text and repairs it.
    fn parse(raw: &str) -> Result<Self, ContractViolation> {
        let parsed: Self = serde_json::from_str(strip_code_fence(raw))
            .map_err(|e| ContractViolation::Malformed(e.to_string()))?;
        parsed.repair()
    }
}

/// Drops a surrounding markdown code fence if the backend added one.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
