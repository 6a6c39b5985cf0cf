//! GetPortfolioHandler - returns the VC's portfolio, opening it lazily.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::portfolio::{Portfolio, PortfolioError};
use crate::ports::PortfolioRepository;

use super::load_or_open;

#[derive(Debug, Clone)]
pub struct GetPortfolioQuery {
    pub user_id: UserId,
}

pub struct GetPortfolioHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl GetPortfolioHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPortfolioQuery) -> Result<Portfolio, PortfolioError> {
        load_or_open(&self.repository, &query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioRepository;

    #[tokio::test]
    async fn opens_empty_portfolio_once() {
        let repo = Arc::new(InMemoryPortfolioRepository::new());
        let handler = GetPortfolioHandler::new(repo.clone());
        let user_id = UserId::new("vc-1").unwrap();

        let first = handler
            .handle(GetPortfolioQuery { user_id: user_id.clone() })
            .await
            .unwrap();
        let second = handler.handle(GetPortfolioQuery { user_id }).await.unwrap();

        assert!(first.companies().is_empty());
        assert_eq!(first.created_at(), second.created_at());
    }
}
