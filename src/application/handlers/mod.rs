//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! repository ports and the advisory router.

pub mod conversation;
pub mod journey;
pub mod portfolio;

pub use conversation::{
    ConversationStore, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use journey::{
    GetJourneyHandler, GetJourneyQuery, GetStepAssistanceHandler, GetStepAssistanceQuery,
    GetStepHandler, GetStepQuery, StepAssistance, StepView, UpdateStepCommand, UpdateStepHandler,
    UpdateStepResult,
};
pub use portfolio::{
    AddCompanyCommand, AddCompanyHandler, CompanyInsights, GenerateCompanyInsightsCommand,
    GenerateCompanyInsightsHandler, GetAnalyticsHandler, GetAnalyticsQuery,
    GetCompanyInsightsHandler, GetCompanyInsightsQuery, GetPipelineHandler, GetPipelineQuery,
    GetPortfolioHandler, GetPortfolioQuery, MovePipelineEntryCommand, MovePipelineEntryHandler,
};
