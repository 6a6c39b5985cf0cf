//! GetStepHandler - reads one step's stored record.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::UserId;
use crate::domain::journey::{resolve_step, resolve_step_key, JourneyError, JourneyStep};
use crate::ports::JourneyRepository;

#[derive(Debug, Clone)]
pub struct GetStepQuery {
    pub user_id: UserId,
    pub step_number: i64,
}

/// A step's record alongside the journey's progress pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub step: JourneyStep,
    /// `None` when nothing was ever written for the step.
    pub data: Option<Value>,
    pub current_step: JourneyStep,
}

pub struct GetStepHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl GetStepHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetStepQuery) -> Result<StepView, JourneyError> {
        let step = resolve_step(query.step_number)?;
        let key = resolve_step_key(query.step_number)?;
        let journey = self
            .repository
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| JourneyError::not_found(query.user_id.clone()))?;

        Ok(StepView {
            step,
            data: journey.step_data().get(&key).cloned(),
            current_step: journey.current_step(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::journey::Journey;
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    async fn seeded() -> Arc<InMemoryJourneyRepository> {
        let repo = Arc::new(InMemoryJourneyRepository::new());
        let mut journey = Journey::start(user());
        journey.record_step(
            JourneyStep::AiSuite,
            json!({"tools": ["Notion"]}).as_object().cloned().unwrap(),
            Timestamp::now(),
        );
        repo.create(&journey).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn returns_stored_record_and_pointer() {
        let handler = GetStepHandler::new(seeded().await);

        let view = handler
            .handle(GetStepQuery { user_id: user(), step_number: 3 })
            .await
            .unwrap();

        assert_eq!(view.step, JourneyStep::AiSuite);
        assert_eq!(view.current_step, JourneyStep::AiSuite);
        assert_eq!(view.data.unwrap()["tools"][0], "Notion");
    }

    #[tokio::test]
    async fn unwritten_step_has_no_data() {
        let handler = GetStepHandler::new(seeded().await);

        let view = handler
            .handle(GetStepQuery { user_id: user(), step_number: 6 })
            .await
            .unwrap();

        assert!(view.data.is_none());
    }

    #[tokio::test]
    async fn missing_journey_is_not_found() {
        let handler = GetStepHandler::new(Arc::new(InMemoryJourneyRepository::new()));

        let err = handler
            .handle(GetStepQuery { user_id: user(), step_number: 1 })
            .await
            .unwrap_err();

        assert!(matches!(err, JourneyError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_step_number_is_rejected() {
        let handler = GetStepHandler::new(seeded().await);

        let err = handler
            .handle(GetStepQuery { user_id: user(), step_number: 9 })
            .await
            .unwrap_err();

        assert_eq!(err, JourneyError::InvalidStep(9));
    }
}
