//! Portfolio-specific error types.

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, UserId};

use super::PipelineStage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// No portfolio row exists for the user.
    PortfolioNotFound(UserId),
    /// Company is not part of the portfolio.
    CompanyNotFound(CompanyId),
    /// The claimed source bucket does not hold the company.
    EntryNotInStage {
        company: CompanyId,
        stage: PipelineStage,
    },
    /// A company with the same id already exists.
    DuplicateCompany(CompanyId),
    /// Request payload was malformed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PortfolioError {
    pub fn portfolio_not_found(user_id: UserId) -> Self {
        PortfolioError::PortfolioNotFound(user_id)
    }
    pub fn company_not_found(id: CompanyId) -> Self {
        PortfolioError::CompanyNotFound(id)
    }
    pub fn entry_not_in_stage(company: CompanyId, stage: PipelineStage) -> Self {
        PortfolioError::EntryNotInStage { company, stage }
    }
    pub fn duplicate_company(id: CompanyId) -> Self {
        PortfolioError::DuplicateCompany(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PortfolioError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PortfolioError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PortfolioError::PortfolioNotFound(_) => ErrorCode::PortfolioNotFound,
            PortfolioError::CompanyNotFound(_) => ErrorCode::CompanyNotFound,
            PortfolioError::EntryNotInStage { .. } => ErrorCode::CompanyNotFound,
            PortfolioError::DuplicateCompany(_) => ErrorCode::ValidationFailed,
            PortfolioError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PortfolioError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PortfolioError::PortfolioNotFound(_) => "Portfolio not found".to_string(),
            PortfolioError::CompanyNotFound(id) => format!("Company not found: {}", id),
            PortfolioError::EntryNotInStage { company, stage } => {
                format!("Company {} is not in pipeline stage '{}'", company, stage)
            }
            PortfolioError::DuplicateCompany(id) => format!("Company already exists: {}", id),
            PortfolioError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PortfolioError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PortfolioError {}

impl From<DomainError> for PortfolioError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PortfolioError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PortfolioError::Infrastructure(err.to_string()),
        }
    }
}
