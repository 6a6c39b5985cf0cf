//! GetJourneyHandler - returns a founder's journey, starting it on first read.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::journey::{Journey, JourneyError};
use crate::ports::JourneyRepository;

#[derive(Debug, Clone)]
pub struct GetJourneyQuery {
    pub user_id: UserId,
}

pub struct GetJourneyHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl GetJourneyHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetJourneyQuery) -> Result<Journey, JourneyError> {
        if let Some(journey) = self.repository.find_by_user(&query.user_id).await? {
            return Ok(journey);
        }

        let journey = Journey::start(query.user_id.clone());
        self.repository.create(&journey).await?;
        info!(user_id = %query.user_id, "Journey started");

        // A concurrent first read may have won the insert; return the stored row.
        Ok(self
            .repository
            .find_by_user(&query.user_id)
            .await?
            .unwrap_or(journey))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyRepository;
    use crate::application::handlers::journey::test_support::FailingJourneyRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::journey::JourneyStep;
    use serde_json::{json, Map};

    fn user() -> UserId {
        UserId::new("founder-1").unwrap()
    }

    #[tokio::test]
    async fn creates_journey_on_first_read() {
        let repo = Arc::new(InMemoryJourneyRepository::new());
        let handler = GetJourneyHandler::new(repo.clone());

        let journey = handler.handle(GetJourneyQuery { user_id: user() }).await.unwrap();

        assert_eq!(journey.current_step(), JourneyStep::Onboarding);
        assert!(journey.step_data().is_empty());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn returns_existing_journey_unchanged() {
        let repo = Arc::new(InMemoryJourneyRepository::new());
        let mut existing = Journey::start(user());
        let payload: Map<_, _> = json!({"problem": "x"}).as_object().cloned().unwrap();
        existing.record_step(JourneyStep::Idea, payload, Timestamp::now());
        repo.create(&existing).await.unwrap();

        let handler = GetJourneyHandler::new(repo);
        let journey = handler.handle(GetJourneyQuery { user_id: user() }).await.unwrap();

        assert_eq!(journey, existing);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_infrastructure() {
        let handler = GetJourneyHandler::new(Arc::new(FailingJourneyRepository));

        let err = handler.handle(GetJourneyQuery { user_id: user() }).await.unwrap_err();
        assert!(matches!(err, JourneyError::Infrastructure(_)));
    }
}
