//! HTTP handlers for advisory endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{RequireAuth, RequireVc};
use crate::application::advisory::AdvisoryRouter;
use crate::application::handlers::{
    ConversationStore, SendChatMessageCommand, SendChatMessageHandler,
};
use crate::domain::advisory::{
    GoToMarketStrategy, IdeaInput, IdeaValidation, MarketInput, MetricsAnalysis, MetricsInput,
    MvpGuidance, PortfolioAnalysis, PortfolioInput, ToolRecommendations,
};
use crate::ports::ConversationRepository;

use super::dto::{
    AnalyzeMarketRequest, AnalyzePortfolioRequest, ChatRequest, ChatResponse,
    GenerateGtmRequest, MarketAnalysisResponse, MvpGuidanceRequest, RecommendToolsRequest,
    ValidateIdeaRequest,
};

type Body<T> = Result<Json<T>, JsonRejection>;

/// Shared state for advisory routes.
#[derive(Clone)]
pub struct AdvisoryAppState {
    pub router: Arc<AdvisoryRouter>,
    pub conversations: Arc<dyn ConversationRepository>,
}

impl AdvisoryAppState {
    pub fn new(router: Arc<AdvisoryRouter>, conversations: Arc<dyn ConversationRepository>) -> Self {
        Self {
            router,
            conversations,
        }
    }

    fn chat_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            ConversationStore::new(self.conversations.clone()),
            self.router.clone(),
        )
    }
}

/// POST /api/ai/validate-idea
pub async fn validate_idea(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<ValidateIdeaRequest>,
) -> Result<Json<IdeaValidation>, ApiError> {
    let Json(req) = body?;
    let input = IdeaInput::try_from(req)?;
    let advised = state.router.validate_idea(&input, Some(&user.id)).await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/analyze-market
pub async fn analyze_market(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<AnalyzeMarketRequest>,
) -> Result<Json<MarketAnalysisResponse>, ApiError> {
    let Json(req) = body?;
    let input = MarketInput::try_from(req)?;
    let advised = state.router.analyze_market(&input, Some(&user.id)).await;
    Ok(Json(MarketAnalysisResponse {
        analysis: advised.into_inner(),
    }))
}

/// POST /api/ai/recommend-tools
pub async fn recommend_tools(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<RecommendToolsRequest>,
) -> Result<Json<ToolRecommendations>, ApiError> {
    let Json(req) = body?;
    let advised = state.router.recommend_tools(&req.into(), Some(&user.id)).await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/mvp-guidance
pub async fn mvp_guidance(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<MvpGuidanceRequest>,
) -> Result<Json<MvpGuidance>, ApiError> {
    let Json(req) = body?;
    let advised = state.router.guide_mvp(&req.into(), Some(&user.id)).await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/generate-gtm
pub async fn generate_gtm(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<GenerateGtmRequest>,
) -> Result<Json<GoToMarketStrategy>, ApiError> {
    let Json(req) = body?;
    let advised = state.router.plan_go_to_market(&req.into(), Some(&user.id)).await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/analyze-metrics
pub async fn analyze_metrics(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<MetricsInput>,
) -> Result<Json<MetricsAnalysis>, ApiError> {
    let Json(metrics) = body?;
    let advised = state.router.analyze_metrics(&metrics, Some(&user.id)).await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/analyze-portfolio
pub async fn analyze_portfolio(
    State(state): State<AdvisoryAppState>,
    RequireVc(user): RequireVc,
    body: Body<AnalyzePortfolioRequest>,
) -> Result<Json<PortfolioAnalysis>, ApiError> {
    let Json(req) = body?;
    let input = PortfolioInput::try_from(req)?;
    let advised = state
        .router
        .analyze_portfolio_company(&input, Some(&user.id))
        .await;
    Ok(Json(advised.into_inner()))
}

/// POST /api/ai/chat
pub async fn chat(
    State(state): State<AdvisoryAppState>,
    RequireAuth(user): RequireAuth,
    body: Body<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body?;
    let cmd = SendChatMessageCommand {
        user_id: user.id,
        message: req.message.unwrap_or_default(),
        tag: req.journey_step,
        context: req.context.unwrap_or_default(),
    };

    let result = state.chat_handler().handle(cmd).await?;
    Ok(Json(ChatResponse {
        message: result.reply,
        conversation_history: result.conversation.turns().to_vec(),
    }))
}
