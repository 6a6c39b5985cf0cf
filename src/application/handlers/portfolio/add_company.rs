//! AddCompanyHandler - adds a company and drops it into `applicants`.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::portfolio::{Company, PortfolioError};
use crate::ports::PortfolioRepository;

use super::load_or_open;

#[derive(Debug, Clone)]
pub struct AddCompanyCommand {
    pub user_id: UserId,
    pub company: Company,
}

pub struct AddCompanyHandler {
    repository: Arc<dyn PortfolioRepository>,
}

impl AddCompanyHandler {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddCompanyCommand) -> Result<Company, PortfolioError> {
        let mut portfolio = load_or_open(&self.repository, &cmd.user_id).await?;

        portfolio.add_company(cmd.company.clone(), Timestamp::now())?;
        self.repository.update(&portfolio).await?;

        info!(user_id = %cmd.user_id, company_id = %cmd.company.id, "Company added");
        Ok(cmd.company)
    }
}
