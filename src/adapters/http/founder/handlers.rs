//! HTTP handlers for founder journey endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireFounder;
use crate::application::handlers::{
    ConversationStore, GetJourneyHandler, GetJourneyQuery, GetStepAssistanceHandler,
    GetStepAssistanceQuery, GetStepHandler, GetStepQuery, UpdateStepCommand, UpdateStepHandler,
};
use crate::ports::{ConversationRepository, JourneyRepository};

use super::dto::{
    JourneyResponse, JourneyView, StepAssistanceResponse, StepResponse, UpdateStepResponse,
};

/// Shared state for founder routes.
#[derive(Clone)]
pub struct FounderAppState {
    pub journeys: Arc<dyn JourneyRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
}

impl FounderAppState {
    pub fn new(
        journeys: Arc<dyn JourneyRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            journeys,
            conversations,
        }
    }

    fn get_journey_handler(&self) -> GetJourneyHandler {
        GetJourneyHandler::new(self.journeys.clone())
    }

    fn get_step_handler(&self) -> GetStepHandler {
        GetStepHandler::new(self.journeys.clone())
    }

    fn update_step_handler(&self) -> UpdateStepHandler {
        UpdateStepHandler::new(self.journeys.clone())
    }

    fn step_assistance_handler(&self) -> GetStepAssistanceHandler {
        GetStepAssistanceHandler::new(ConversationStore::new(self.conversations.clone()))
    }
}

fn step_number(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid step number: {}", raw)))
}

/// GET /api/founder/journey
pub async fn get_journey(
    State(state): State<FounderAppState>,
    RequireFounder(user): RequireFounder,
) -> Result<Json<JourneyResponse>, ApiError> {
    let journey = state
        .get_journey_handler()
        .handle(GetJourneyQuery { user_id: user.id })
        .await?;

    Ok(Json(JourneyResponse {
        journey: JourneyView::from(&journey),
    }))
}

/// GET /api/founder/journey/step/:stepNumber
pub async fn get_step(
    State(state): State<FounderAppState>,
    RequireFounder(user): RequireFounder,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StepResponse>, ApiError> {
    let query = GetStepQuery {
        user_id: user.id,
        step_number: step_number(path)?,
    };
    let view = state.get_step_handler().handle(query).await?;
    Ok(Json(view.into()))
}

/// PUT /api/founder/journey/step/:stepNumber
///
/// The body must be a JSON object; its keys are merged into the step record.
pub async fn update_step(
    State(state): State<FounderAppState>,
    RequireFounder(user): RequireFounder,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateStepResponse>, ApiError> {
    let step_number = step_number(path)?;
    let Json(body) = body?;
    let Value::Object(payload) = body else {
        return Err(ApiError::BadRequest(
            "Step data must be a JSON object".to_string(),
        ));
    };

    let cmd = UpdateStepCommand {
        user_id: user.id,
        step_number,
        payload,
    };
    let result = state.update_step_handler().handle(cmd).await?;
    Ok(Json(result.into()))
}

/// GET /api/founder/journey/step/:stepNumber/ai-assist
pub async fn get_step_assistance(
    State(state): State<FounderAppState>,
    RequireFounder(user): RequireFounder,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StepAssistanceResponse>, ApiError> {
    let query = GetStepAssistanceQuery {
        user_id: user.id,
        step_number: step_number(path)?,
    };
    let assistance = state.step_assistance_handler().handle(query).await?;
    Ok(Json(assistance.into()))
}
