//! HTTP handlers for VC portfolio endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireVc;
use crate::application::advisory::AdvisoryRouter;
use crate::application::handlers::{
    AddCompanyCommand, AddCompanyHandler, GenerateCompanyInsightsCommand,
    GenerateCompanyInsightsHandler, GetAnalyticsHandler, GetAnalyticsQuery,
    GetCompanyInsightsHandler, GetCompanyInsightsQuery, GetPipelineHandler, GetPipelineQuery,
    GetPortfolioHandler, GetPortfolioQuery, MovePipelineEntryCommand, MovePipelineEntryHandler,
};
use crate::domain::foundation::CompanyId;
use crate::domain::portfolio::{Company, PortfolioError};
use crate::ports::PortfolioRepository;

use super::dto::{
    AddCompanyRequest, AnalyticsResponse, CompanyResponse, InsightsResponse, MoveCompanyRequest,
    MoveCompanyResponse, PipelineMove, PipelineResponse, PortfolioResponse, PortfolioView,
};

/// Shared state for VC routes.
#[derive(Clone)]
pub struct VcAppState {
    pub portfolios: Arc<dyn PortfolioRepository>,
    pub router: Arc<AdvisoryRouter>,
}

impl VcAppState {
    pub fn new(portfolios: Arc<dyn PortfolioRepository>, router: Arc<AdvisoryRouter>) -> Self {
        Self { portfolios, router }
    }

    fn get_portfolio_handler(&self) -> GetPortfolioHandler {
        GetPortfolioHandler::new(self.portfolios.clone())
    }

    fn get_pipeline_handler(&self) -> GetPipelineHandler {
        GetPipelineHandler::new(self.portfolios.clone())
    }

    fn move_entry_handler(&self) -> MovePipelineEntryHandler {
        MovePipelineEntryHandler::new(self.portfolios.clone())
    }

    fn analytics_handler(&self) -> GetAnalyticsHandler {
        GetAnalyticsHandler::new(self.portfolios.clone())
    }

    fn add_company_handler(&self) -> AddCompanyHandler {
        AddCompanyHandler::new(self.portfolios.clone())
    }

    fn get_insights_handler(&self) -> GetCompanyInsightsHandler {
        GetCompanyInsightsHandler::new(self.portfolios.clone())
    }

    fn generate_insights_handler(&self) -> GenerateCompanyInsightsHandler {
        GenerateCompanyInsightsHandler::new(self.portfolios.clone(), self.router.clone())
    }
}

fn company_id(path: Result<Path<String>, PathRejection>) -> Result<CompanyId, ApiError> {
    let Path(raw) = path?;
    CompanyId::new(raw)
        .map_err(|e| PortfolioError::validation("companyId", e.to_string()).into())
}

/// GET /api/vc/portfolio
pub async fn get_portfolio(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let portfolio = state
        .get_portfolio_handler()
        .handle(GetPortfolioQuery { user_id: user.id })
        .await?;

    Ok(Json(PortfolioResponse {
        portfolio: PortfolioView::from(&portfolio),
    }))
}

/// GET /api/vc/pipeline
pub async fn get_pipeline(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
) -> Result<Json<PipelineResponse>, ApiError> {
    let pipeline = state
        .get_pipeline_handler()
        .handle(GetPipelineQuery { user_id: user.id })
        .await?;
    Ok(Json(PipelineResponse { pipeline }))
}

/// POST /api/vc/pipeline/move
pub async fn move_company(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
    body: Result<Json<MoveCompanyRequest>, JsonRejection>,
) -> Result<Json<MoveCompanyResponse>, ApiError> {
    let Json(req) = body?;
    let PipelineMove {
        company_id,
        from,
        to,
    } = PipelineMove::try_from(req)?;

    let cmd = MovePipelineEntryCommand {
        user_id: user.id,
        company_id,
        from,
        to,
    };
    let pipeline = state.move_entry_handler().handle(cmd).await?;
    Ok(Json(pipeline.into()))
}

/// GET /api/vc/analytics
pub async fn get_analytics(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let analytics = state
        .analytics_handler()
        .handle(GetAnalyticsQuery { user_id: user.id })
        .await?;
    Ok(Json(AnalyticsResponse { analytics }))
}

/// POST /api/vc/companies
pub async fn add_company(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
    body: Result<Json<AddCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let Json(req) = body?;
    let company = Company::try_from(req)?;

    let added = state
        .add_company_handler()
        .handle(AddCompanyCommand {
            user_id: user.id,
            company,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(added.into())))
}

/// GET /api/vc/ai-insights/:companyId
pub async fn get_insights(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let query = GetCompanyInsightsQuery {
        user_id: user.id,
        company_id: company_id(path)?,
    };
    let found = state.get_insights_handler().handle(query).await?;
    Ok(Json(found.into()))
}

/// POST /api/vc/ai-insights/:companyId
///
/// Runs the portfolio agent for the stored company and saves the result on it.
pub async fn generate_insights(
    State(state): State<VcAppState>,
    RequireVc(user): RequireVc,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let cmd = GenerateCompanyInsightsCommand {
        user_id: user.id,
        company_id: company_id(path)?,
    };
    let generated = state.generate_insights_handler().handle(cmd).await?;
    Ok(Json(generated.into()))
}
