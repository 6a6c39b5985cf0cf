//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - generative backend used by the advisory router
//! - `SessionValidator` - bearer token validation
//! - `JourneyRepository`, `PortfolioRepository`, `ConversationRepository` -
//!   document-style persistence with whole-row writes

mod ai_provider;
mod conversation_repository;
mod journey_repository;
mod portfolio_repository;
mod session_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use conversation_repository::ConversationRepository;
pub use journey_repository::JourneyRepository;
pub use portfolio_repository::PortfolioRepository;
pub use session_validator::SessionValidator;
