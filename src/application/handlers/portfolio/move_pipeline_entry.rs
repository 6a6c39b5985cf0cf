//! MovePipelineEntryHandler - moves a company between pipeline buckets.
//!
//! Both buckets change in one row write. A company that is not in the
//! claimed source bucket is reported as not found; nothing is synthesized.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CompanyId, Timestamp, UserId};
use crate::domain::portfolio::{Pipeline, PipelineStage, PortfolioError};
use crate::ports::PortfolioRepository;

use super::load_existing;

#[derive(Debug, Clone)]
pub struct MovePipelineEntryCommand {
    pub user_id: UserId,
    pub company_id: CompanyId,
    pub from: PipelineStage,
    pub to: PipelineStage,
}

pub struct MovePipelineEntryHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl MovePipelineEntryHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Returns the pipeline after the move.
    pub async fn handle(&self, cmd: MovePipelineEntryCommand) -> Result<Pipeline, PortfolioError> {
        let mut portfolio = load_existing(&self.repository, &cmd.user_id).await?;

        portfolio.move_company(&cmd.company_id, cmd.from, cmd.to, Timestamp::now())?;
        self.repository.update(&portfolio).await?;

        info!(
            user_id = %cmd.user_id,
            company_id = %cmd.company_id,
            from = %cmd.from,
            to = %cmd.to,
            "Pipeline entry moved"
        );
        Ok(portfolio.pipeline().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioRepository;
    use crate::domain::portfolio::{Company, Portfolio};

    fn owner() -> UserId {
        UserId::new("vc-1").unwrap()
    }

    fn acme() -> CompanyId {
        CompanyId::new("acme").unwrap()
    }

    async fn seeded() -> Arc<InMemoryPortfolioRepository> {
        let repo = Arc::new(InMemoryPortfolioRepository::new());
        let mut portfolio = Portfolio::open(owner());
        portfolio
            .add_company(Company::new(acme()), Timestamp::now())
            .unwrap();
        repo.create(&portfolio).await.unwrap();
        repo
    }

    fn cmd(from: PipelineStage, to: PipelineStage) -> MovePipelineEntryCommand {
        MovePipelineEntryCommand {
            user_id: owner(),
            company_id: acme(),
            from,
            to,
        }
    }

    #[tokio::test]
    async fn moves_entry_and_persists() {
        let repo = seeded().await;
        let handler = MovePipelineEntryHandler::new(repo.clone());

        let pipeline = handler
            .handle(cmd(PipelineStage::Applicants, PipelineStage::UnderReview))
            .await
            .unwrap();

        assert_eq!(pipeline.len(PipelineStage::Applicants), 0);
        assert_eq!(pipeline.stage_of(&acme()), Some(PipelineStage::UnderReview));

        let stored = repo.find_by_owner(&owner()).await.unwrap().unwrap();
        assert_eq!(stored.pipeline(), &pipeline);
    }

    #[tokio::test]
    async fn wrong_source_stage_is_not_found_and_changes_nothing() {
        let repo = seeded().await;
        let handler = MovePipelineEntryHandler::new(repo.clone());

        let err = handler
            .handle(cmd(PipelineStage::DueDiligence, PipelineStage::Invested))
            .await
            .unwrap_err();

        assert!(matches!(err, PortfolioError::EntryNotInStage { .. }));
        let stored = repo.find_by_owner(&owner()).await.unwrap().unwrap();
        assert_eq!(stored.pipeline().stage_of(&acme()), Some(PipelineStage::Applicants));
    }

    #[tokio::test]
    async fn missing_portfolio_is_not_found() {
        let handler = MovePipelineEntryHandler::new(Arc::new(InMemoryPortfolioRepository::new()));

        let err = handler
            .handle(cmd(PipelineStage::Applicants, PipelineStage::Invested))
            .await
            .unwrap_err();

        assert!(matches!(err, PortfolioError::PortfolioNotFound(_)));
    }
}
