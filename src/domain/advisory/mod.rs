//! Advisory domain - structured guidance for founders and VCs.
//!
//! Each advisory domain has a typed response contract ([`AdvisoryContract`])
//! that owns its prompt, its repair rules, and a deterministic fallback. The
//! application-layer router decides which path produces the answer.

mod agents;
mod contract;
mod errors;
pub mod fallback;
pub mod inputs;
pub mod lenient;
pub mod outputs;
pub mod prompts;

pub use agents::{DEFAULT_FEASIBILITY, SCORE_CEILING};
pub use contract::{AdvisoryContract, AdvisoryDomain, ContractViolation};
pub use errors::AdvisoryError;
pub use inputs::{
    GtmInput, IdeaInput, MarketInput, MetricsInput, MvpInput, PortfolioInput, ToolInput,
};
pub use outputs::{
    FollowOnRecommendation, GoToMarketStrategy, HealthAssessment, IdeaValidation,
    MetricsAnalysis, MvpGuidance, PortfolioAnalysis, ToolRecommendations,
};
