//! In-memory JourneyRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::journey::Journey;
use crate::ports::JourneyRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryJourneyRepository {
    journeys: Arc<RwLock<HashMap<UserId, Journey>>>,
}

impl InMemoryJourneyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored journeys.
    pub async fn len(&self) -> usize {
        self.journeys.read().await.len()
    }
}

#[async_trait]
impl JourneyRepository for InMemoryJourneyRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journey>, DomainError> {
        Ok(self.journeys.read().await.get(user_id).cloned())
    }

    async fn create(&self, journey: &Journey) -> Result<(), DomainError> {
        self.journeys
            .write()
            .await
            .entry(journey.user_id().clone())
            .or_insert_with(|| journey.clone());
        Ok(())
    }

    async fn update(&self, journey: &Journey) -> Result<(), DomainError> {
        let mut journeys = self.journeys.write().await;
        match journeys.get_mut(journey.user_id()) {
            Some(stored) => {
                *stored = journey.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::JourneyNotFound,
                format!("Journey not found for user {}", journey.user_id()),
            )),
        }
    }
}
