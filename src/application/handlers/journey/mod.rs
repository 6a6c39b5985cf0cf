//! Journey command and query handlers.

mod get_journey;
mod get_step;
mod get_step_assistance;
mod update_step;

pub use get_journey::{GetJourneyHandler, GetJourneyQuery};
pub use get_step::{GetStepHandler, GetStepQuery, StepView};
pub use get_step_assistance::{GetStepAssistanceHandler, GetStepAssistanceQuery, StepAssistance};
pub use update_step::{UpdateStepCommand, UpdateStepHandler, UpdateStepResult};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, UserId};
    use crate::domain::journey::Journey;
    use crate::ports::JourneyRepository;

    /// Repository whose every call fails like a dropped connection.
    pub struct FailingJourneyRepository;

    #[async_trait]
    impl JourneyRepository for FailingJourneyRepository {
        async fn find_by_user(&self, _user_id: &UserId) -> Result<Option<Journey>, DomainError> {
            Err(DomainError::database("connection refused"))
        }

        async fn create(&self, _journey: &Journey) -> Result<(), DomainError> {
            Err(DomainError::database("connection refused"))
        }

        async fn update(&self, _journey: &Journey) -> Result<(), DomainError> {
            Err(DomainError::database("connection refused"))
        }
    }
}
