//! Request and response bodies for founder endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::handlers::{StepAssistance, StepView, UpdateStepResult};
use crate::domain::conversation::Turn;
use crate::domain::journey::Journey;

/// Journey as stored, keyed the way the web client reads it.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyView {
    pub user_id: String,
    pub current_step: i32,
    pub step_data: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Journey> for JourneyView {
    fn from(journey: &Journey) -> Self {
        Self {
            user_id: journey.user_id().to_string(),
            current_step: journey.current_step().number(),
            step_data: journey.step_data().clone(),
            created_at: journey.created_at().to_rfc3339(),
            updated_at: journey.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JourneyResponse {
    pub journey: JourneyView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub step_number: i32,
    pub data: Option<Value>,
    pub current_step: i32,
}

impl From<StepView> for StepResponse {
    fn from(view: StepView) -> Self {
        Self {
            step_number: view.step.number(),
            data: view.data,
            current_step: view.current_step.number(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStepResponse {
    pub message: &'static str,
    pub current_step: i32,
    pub step_data: Value,
}

impl From<UpdateStepResult> for UpdateStepResponse {
    fn from(result: UpdateStepResult) -> Self {
        Self {
            message: "Step updated successfully",
            current_step: result.current_step.number(),
            step_data: result.step_data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAssistanceResponse {
    pub conversation_history: Vec<Turn>,
    pub can_chat: bool,
}

impl From<StepAssistance> for StepAssistanceResponse {
    fn from(assistance: StepAssistance) -> Self {
        Self {
            conversation_history: assistance.history,
            can_chat: assistance.can_chat,
        }
    }
}
