//! In-memory PortfolioRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::portfolio::Portfolio;
use crate::ports::PortfolioRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioRepository {
    portfolios: Arc<RwLock<HashMap<UserId, Portfolio>>>,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Option<Portfolio>, DomainError> {
        Ok(self.portfolios.read().await.get(user_id).cloned())
    }

    async fn create(&self, portfolio: &Portfolio) -> Result<(), DomainError> {
        self.portfolios
            .write()
            .await
            .entry(portfolio.user_id().clone())
            .or_insert_with(|| portfolio.clone());
        Ok(())
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), DomainError> {
        let mut portfolios = self.portfolios.write().await;
        let stored = portfolios.get_mut(portfolio.user_id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::PortfolioNotFound,
                format!("Portfolio not found for user {}", portfolio.user_id()),
            )
        })?;
        *stored = portfolio.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_portfolio() {
        let repo = InMemoryPortfolioRepository::new();
        let owner = UserId::new("vc-1").unwrap();

        assert!(repo.find_by_owner(&owner).await.unwrap().is_none());
        repo.create(&Portfolio::open(owner.clone())).await.unwrap();

        let stored = repo.find_by_owner(&owner).await.unwrap().unwrap();
        assert!(stored.companies().is_empty());
        assert!(repo.update(&stored).await.is_ok());
    }
}
