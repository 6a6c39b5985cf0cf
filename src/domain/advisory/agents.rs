//! Contract implementations tying each response shape to its prompt, repair
//! rules, and fallback generator.

use super::contract::{AdvisoryContract, AdvisoryDomain, ContractViolation};
use super::fallback;
use super::inputs::{GtmInput, IdeaInput, MetricsInput, MvpInput, PortfolioInput, ToolInput};
use super::outputs::{
    GoToMarketStrategy, IdeaValidation, MetricsAnalysis, MvpGuidance, PortfolioAnalysis,
    ToolRecommendations,
};
use super::prompts;

/// Highest value any score field may take.
pub const SCORE_CEILING: u32 = 100;

/// Score used when the backend omits feasibility.
pub const DEFAULT_FEASIBILITY: u32 = 50;

impl AdvisoryContract for IdeaValidation {
    type Input = IdeaInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::IdeaValidation;

    fn system_prompt() -> &'static str {
        prompts::IDEA_SYSTEM
    }

    fn user_prompt(input: &IdeaInput) -> String {
        prompts::idea(input)
    }

    fn fallback(input: &IdeaInput) -> Self {
        fallback::idea::generate(input)
    }

    /// Every field has a default; this contract never rejects.
    fn repair(mut self) -> Result<Self, ContractViolation> {
        if self.market_size.trim().is_empty() {
            self.market_size = "Market analysis pending".to_string();
        }
        if self.explanation.trim().is_empty() {
            self.explanation = "Analysis in progress".to_string();
        }
        if self.feasibility_score == 0 {
            self.feasibility_score = DEFAULT_FEASIBILITY;
        }
        self.feasibility_score = self.feasibility_score.min(SCORE_CEILING);
        self.competitors.retain(|c| !c.name.trim().is_empty());
        Ok(self)
    }
}

impl AdvisoryContract for ToolRecommendations {
    type Input = ToolInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::ToolRecommendation;

    fn system_prompt() -> &'static str {
        prompts::TOOLS_SYSTEM
    }

    fn user_prompt(input: &ToolInput) -> String {
        prompts::tools(input)
    }

    fn fallback(input: &ToolInput) -> Self {
        fallback::tools::generate(input)
    }

    fn repair(mut self) -> Result<Self, ContractViolation> {
        self.tools.retain(|t| !t.name.trim().is_empty());
        if self.tools.is_empty() {
            return Err(ContractViolation::MissingField("tools"));
        }
        Ok(self)
    }
}

impl AdvisoryContract for MvpGuidance {
    type Input = MvpInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::MvpGuidance;

    fn system_prompt() -> &'static str {
        prompts::MVP_SYSTEM
    }

    fn user_prompt(input: &MvpInput) -> String {
        prompts::mvp(input)
    }

    fn fallback(input: &MvpInput) -> Self {
        fallback::mvp::generate(input)
    }

    fn repair(mut self) -> Result<Self, ContractViolation> {
        self.must_have_features.retain(|f| !f.feature.trim().is_empty());
        if self.must_have_features.is_empty() {
            return Err(ContractViolation::MissingField("mustHaveFeatures"));
        }
        Ok(self)
    }
}

impl AdvisoryContract for GoToMarketStrategy {
    type Input = GtmInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::GoToMarket;

    fn system_prompt() -> &'static str {
        prompts::GTM_SYSTEM
    }

    fn user_prompt(input: &GtmInput) -> String {
        prompts::gtm(input)
    }

    fn fallback(input: &GtmInput) -> Self {
        fallback::gtm::generate(input)
    }

    fn repair(mut self) -> Result<Self, ContractViolation> {
        self.channels.retain(|c| !c.name.trim().is_empty());
        if self.channels.is_empty() {
            return Err(ContractViolation::MissingField("channels"));
        }
        Ok(self)
    }
}

impl AdvisoryContract for MetricsAnalysis {
    type Input = MetricsInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::MetricsAnalysis;

    fn system_prompt() -> &'static str {
        prompts::METRICS_SYSTEM
    }

    fn user_prompt(input: &MetricsInput) -> String {
        prompts::metrics(input)
    }

    fn fallback(input: &MetricsInput) -> Self {
        fallback::metrics::generate(input)
    }

    fn repair(mut self) -> Result<Self, ContractViolation> {
        self.pmf_score = self.pmf_score.min(SCORE_CEILING);
        Ok(self)
    }
}

impl AdvisoryContract for PortfolioAnalysis {
    type Input = PortfolioInput;
    const DOMAIN: AdvisoryDomain = AdvisoryDomain::PortfolioAnalysis;

    fn system_prompt() -> &'static str {
        prompts::PORTFOLIO_SYSTEM
    }

    fn user_prompt(input: &PortfolioInput) -> String {
        prompts::portfolio(input)
    }

    fn fallback(input: &PortfolioInput) -> Self {
        fallback::portfolio::generate(input)
    }

    fn repair(mut self) -> Result<Self, ContractViolation> {
        self.health_score = self.health_score.min(SCORE_CEILING);
        let breakdown = &mut self.score_breakdown;
        for score in [
            &mut breakdown.traction,
            &mut breakdown.team,
            &mut breakdown.market,
            &mut breakdown.financials,
        ] {
            *score = (*score).min(SCORE_CEILING);
        }
        Ok(self)
    }
}
