//! UpdateStepHandler - merges a payload into a step and advances the journey.
//!
//! Read-modify-write over the whole journey row. Two concurrent updates for
//! the same founder race and the later write wins; a founder works through
//! a single client, so this is accepted.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::journey::{resolve_step, JourneyError, JourneyStep};
use crate::ports::JourneyRepository;


#[derive(Debug, Clone)]
pub struct UpdateStepCommand {
    pub user_id: UserId,
    pub step_number: i64,
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStepResult {
    pub step: JourneyStep,
    pub current_step: JourneyStep,
    /// The step's merged record, including `completedAt`.
    pub step_data: Value,
}

pub struct UpdateStepHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl UpdateStepHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateStepCommand) -> Result<UpdateStepResult, JourneyError> {
        let step = resolve_step(cmd.step_number)?;

        let mut journey = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| JourneyError::not_found(cmd.user_id.clone()))?;

        let step_data = journey.record_step(step, cmd.payload, Timestamp::now()).clone();
        self.repository.update(&journey).await?;

        info!(
            user_id = %cmd.user_id,
            step = step.number(),
            current_step = journey.current_step().number(),
            "Journey step recorded"
        );

        Ok(UpdateStepResult {
            step,
            current_step: journey.current_step(),
            step_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyRepository;
    use crate::domain::journey::{Journey, COMPLETED_AT_FIELD};
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    async fn started() -> Arc<InMemoryJourneyRepository> {
        let repo = Arc::new(InMemoryJourneyRepository::new());
        repo.create(&Journey::start(user())).await.unwrap();
        repo
    }

    fn cmd(step_number: i64, value: Value) -> UpdateStepCommand {
        UpdateStepCommand {
            user_id: user(),
            step_number,
            payload: payload(value),
        }
    }

    #[tokio::test]
    async fn merges_and_advances() {
        let repo = started().await;
        let handler = UpdateStepHandler::new(repo.clone());

        handler
            .handle(cmd(5, json!({"interviews": 12, "notes": "draft"})))
            .await
            .unwrap();
        let result = handler.handle(cmd(5, json!({"notes": "final"}))).await.unwrap();

        assert_eq!(result.current_step, JourneyStep::Testing);
        assert_eq!(result.step_data["interviews"], 12);
        assert_eq!(result.step_data["notes"], "final");
        assert!(result.step_data.get(COMPLETED_AT_FIELD).is_some());

        let stored = repo.find_by_user(&user()).await.unwrap().unwrap();
        assert_eq!(stored.step_record(JourneyStep::Testing), Some(&result.step_data));
    }

    #[tokio::test]
    async fn revisiting_earlier_step_keeps_pointer() {
        let handler = UpdateStepHandler::new(started().await);

        handler.handle(cmd(6, json!({"channel": "seo"}))).await.unwrap();
        let result = handler.handle(cmd(2, json!({"problem": "p"}))).await.unwrap();

        assert_eq!(result.step, JourneyStep::Idea);
        assert_eq!(result.current_step, JourneyStep::Gtm);
    }

    #[tokio::test]
    async fn missing_journey_is_not_found() {
        let handler = UpdateStepHandler::new(Arc::new(InMemoryJourneyRepository::new()));

        let err = handler.handle(cmd(1, json!({}))).await.unwrap_err();
        assert!(matches!(err, JourneyError::NotFound(_)));
    }

    #[tokio::test]
    async fn out_of_range_step_is_rejected_before_reading() {
        let handler = UpdateStepHandler::new(Arc::new(
            crate::application::handlers::journey::test_support::FailingJourneyRepository,
        ));

        let err = handler.handle(cmd(0, json!({}))).await.unwrap_err();
        assert_eq!(err, JourneyError::InvalidStep(0));
    }
}
