//! AdvisoryRouter - picks the generative backend or the deterministic
//! fallback for every advisory request.
//!
//! The backend is injected at construction time. When it is absent, slow,
//! failing, or returns output that breaks the domain's contract, the router
//! answers with the fallback generator for the same domain. Callers never
//! see a backend error.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::advisory::{
    fallback, prompts, AdvisoryContract, ContractViolation, GoToMarketStrategy, GtmInput,
    IdeaInput, IdeaValidation, MarketInput, MetricsAnalysis, MetricsInput, MvpGuidance,
    MvpInput, PortfolioAnalysis, PortfolioInput, ToolInput, ToolRecommendations,
};
use crate::domain::conversation::{Turn, TurnRole};
use crate::domain::foundation::UserId;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, ResponseFormat,
};

/// Token ceiling for the free-text market analysis.
pub const MARKET_MAX_TOKENS: u32 = 1500;

/// Purpose label attached to chat and market requests.
const CHAT_PURPOSE: &str = "chat";
const MARKET_PURPOSE: &str = "market_analysis";

/// Tunables for backend calls.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorySettings {
    /// Limit on a single backend call before the fallback answers.
    pub timeout: Duration,
    pub temperature: f32,
    /// Token ceiling for structured advisory responses.
    pub max_tokens: u32,
    pub chat_max_tokens: u32,
}

impl Default for AdvisorySettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            temperature: 0.7,
            max_tokens: 2000,
            chat_max_tokens: 1000,
        }
    }
}

/// Which path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
    Backend,
    Fallback,
}

impl AdviceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceSource::Backend => "backend",
            AdviceSource::Fallback => "fallback",
        }
    }
}

/// An answer plus the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    pub value: T,
    pub source: AdviceSource,
}

impl<T> Advised<T> {
    fn backend(value: T) -> Self {
        Self {
            value,
            source: AdviceSource::Backend,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            source: AdviceSource::Fallback,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Why the fallback answered instead of the backend.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("no generative backend configured")]
    NotConfigured,

    #[error("backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("backend call failed: {0}")]
    Provider(#[from] AIError),

    #[error("backend output rejected: {0}")]
    Contract(#[from] ContractViolation),
}

impl FallbackReason {
    /// Short, stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => "not_configured",
            FallbackReason::Timeout(_) => "timeout",
            FallbackReason::Provider(_) => "provider_error",
            FallbackReason::Contract(_) => "contract_violation",
        }
    }
}

/// Routes advisory requests to the backend or the fallback generators.
#[derive(Clone)]
pub struct AdvisoryRouter {
    backend: Option<Arc<dyn AIProvider>>,
    settings: AdvisorySettings,
}

impl AdvisoryRouter {
    pub fn new(backend: Option<Arc<dyn AIProvider>>, settings: AdvisorySettings) -> Self {
        Self { backend, settings }
    }

    /// A router that always answers from the fallback generators.
    pub fn fallback_only() -> Self {
        Self::new(None, AdvisorySettings::default())
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Produces a typed answer for any advisory domain.
    pub async fn generate<C: AdvisoryContract>(
        &self,
        input: &C::Input,
        user: Option<&UserId>,
    ) -> Advised<C> {
        let domain = C::DOMAIN.as_str();
        match self.try_backend::<C>(input, user).await {
            Ok(value) => {
                info!(domain, source = "backend", "Advisory response generated");
                Advised::backend(value)
            }
            Err(reason) => {
                log_fallback(domain, &reason);
                Advised::fallback(C::fallback(input))
            }
        }
    }

    async fn try_backend<C: AdvisoryContract>(
        &self,
        input: &C::Input,
        user: Option<&UserId>,
    ) -> Result<C, FallbackReason> {
        let request = CompletionRequest::new(RequestMetadata::new(user.cloned(), C::DOMAIN.as_str()))
            .with_system_prompt(C::system_prompt())
            .with_message(MessageRole::User, C::user_prompt(input))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens)
            .with_response_format(ResponseFormat::JsonObject);

        let raw = self.complete(request).await?;
        Ok(C::parse(&raw)?)
    }

    /// Single bounded backend call. No retries.
    async fn complete(&self, request: CompletionRequest) -> Result<String, FallbackReason> {
        let backend = self.backend.as_ref().ok_or(FallbackReason::NotConfigured)?;
        debug!(
            purpose = %request.metadata.purpose,
            trace_id = %request.metadata.trace_id,
            "Calling generative backend"
        );

        let response = tokio::time::timeout(self.settings.timeout, backend.complete(request))
            .await
            .map_err(|_| FallbackReason::Timeout(self.settings.timeout))??;

        Ok(response.content)
    }

    pub async fn validate_idea(
        &self,
        input: &IdeaInput,
        user: Option<&UserId>,
    ) -> Advised<IdeaValidation> {
        self.generate::<IdeaValidation>(input, user).await
    }

    pub async fn recommend_tools(
        &self,
        input: &ToolInput,
        user: Option<&UserId>,
    ) -> Advised<ToolRecommendations> {
        self.generate::<ToolRecommendations>(input, user).await
    }

    pub async fn guide_mvp(&self, input: &MvpInput, user: Option<&UserId>) -> Advised<MvpGuidance> {
        self.generate::<MvpGuidance>(input, user).await
    }

    pub async fn plan_go_to_market(
        &self,
        input: &GtmInput,
        user: Option<&UserId>,
    ) -> Advised<GoToMarketStrategy> {
        self.generate::<GoToMarketStrategy>(input, user).await
    }

    pub async fn analyze_metrics(
        &self,
        input: &MetricsInput,
        user: Option<&UserId>,
    ) -> Advised<MetricsAnalysis> {
        self.generate::<MetricsAnalysis>(input, user).await
    }

    pub async fn analyze_portfolio_company(
        &self,
        input: &PortfolioInput,
        user: Option<&UserId>,
    ) -> Advised<PortfolioAnalysis> {
        self.generate::<PortfolioAnalysis>(input, user).await
    }

    /// Free-text market analysis.
    pub async fn analyze_market(&self, input: &MarketInput, user: Option<&UserId>) -> Advised<String> {
        let request = CompletionRequest::new(RequestMetadata::new(user.cloned(), MARKET_PURPOSE))
            .with_system_prompt(prompts::MARKET_SYSTEM)
            .with_message(MessageRole::User, prompts::market(input))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(MARKET_MAX_TOKENS);

        self.text_or_fallback(MARKET_PURPOSE, request, || fallback::market::generate(input))
            .await
    }

    /// Chat reply grounded on `history` (already windowed by the caller).
    pub async fn chat_reply(
        &self,
        message: &str,
        history: &[Turn],
        user: Option<&UserId>,
    ) -> Advised<String> {
        let request = history
            .iter()
            .fold(
                CompletionRequest::new(RequestMetadata::new(user.cloned(), CHAT_PURPOSE))
                    .with_system_prompt(prompts::CHAT_SYSTEM),
                |request, turn| {
                    let role = match turn.role {
                        TurnRole::User => MessageRole::User,
                        TurnRole::Assistant => MessageRole::Assistant,
                    };
                    request.with_message(role, turn.content.clone())
                },
            )
            .with_message(MessageRole::User, message)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.chat_max_tokens);

        self.text_or_fallback(CHAT_PURPOSE, request, || fallback::chat::reply(message))
            .await
    }

    async fn text_or_fallback(
        &self,
        purpose: &'static str,
        request: CompletionRequest,
        fallback: impl FnOnce() -> String,
    ) -> Advised<String> {
        let outcome = self.complete(request).await.and_then(|text| {
            if text.trim().is_empty() {
                Err(FallbackReason::Provider(AIError::parse("empty completion")))
            } else {
                Ok(text)
            }
        });

        match outcome {
            Ok(text) => {
                info!(domain = purpose, source = "backend", "Advisory response generated");
                Advised::backend(text)
            }
            Err(reason) => {
                log_fallback(purpose, &reason);
                Advised::fallback(fallback())
            }
        }
    }
}

fn log_fallback(domain: &str, reason: &FallbackReason) {
    match reason {
        FallbackReason::NotConfigured => {
            debug!(domain, source = "fallback", reason = reason.kind(), "Using fallback generator");
        }
        _ => {
            warn!(
                domain,
                source = "fallback",
                reason = reason.kind(),
                error = %reason,
                "Backend unavailable, using fallback generator"
            );
        }
    }
}
