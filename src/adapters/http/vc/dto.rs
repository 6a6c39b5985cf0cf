//! Request and response bodies for VC endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::handlers::CompanyInsights;
use crate::domain::foundation::CompanyId;
use crate::domain::portfolio::{
    Company, Pipeline, PipelineStage, Portfolio, PortfolioAnalytics, PortfolioError,
};

/// Portfolio as stored, keyed the way the web client reads it.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub vc_user_id: String,
    pub companies: Vec<Company>,
    pub pipeline: Pipeline,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Portfolio> for PortfolioView {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            vc_user_id: portfolio.user_id().to_string(),
            companies: portfolio.companies().to_vec(),
            pipeline: portfolio.pipeline().clone(),
            created_at: portfolio.created_at().to_rfc3339(),
            updated_at: portfolio.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: PortfolioView,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineResponse {
    pub pipeline: Pipeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: PortfolioAnalytics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveCompanyRequest {
    pub company_id: Option<String>,
    pub from_stage: Option<String>,
    pub to_stage: Option<String>,
}

/// A validated pipeline move.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineMove {
    pub company_id: CompanyId,
    pub from: PipelineStage,
    pub to: PipelineStage,
}

impl TryFrom<MoveCompanyRequest> for PipelineMove {
    type Error = PortfolioError;

    fn try_from(req: MoveCompanyRequest) -> Result<Self, Self::Error> {
        let company_id = CompanyId::new(req.company_id.unwrap_or_default())
            .map_err(|e| PortfolioError::validation("companyId", e.to_string()))?;
        Ok(Self {
            company_id,
            from: stage("fromStage", req.from_stage)?,
            to: stage("toStage", req.to_stage)?,
        })
    }
}

fn stage(field: &'static str, raw: Option<String>) -> Result<PipelineStage, PortfolioError> {
    let raw = raw.ok_or_else(|| PortfolioError::validation(field, "Stage is required"))?;
    raw.parse::<PipelineStage>()
        .map_err(|e| PortfolioError::validation(field, e.to_string()))
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveCompanyResponse {
    pub message: &'static str,
    pub pipeline: Pipeline,
}

impl From<Pipeline> for MoveCompanyResponse {
    fn from(pipeline: Pipeline) -> Self {
        Self {
            message: "Company moved successfully",
            pipeline,
        }
    }
}

/// Company body; the id is generated when the client leaves it out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCompanyRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub investment: Option<f64>,
    #[serde(default)]
    pub health_score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<AddCompanyRequest> for Company {
    type Error = PortfolioError;

    fn try_from(req: AddCompanyRequest) -> Result<Self, Self::Error> {
        let id = match req.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                CompanyId::new(id).map_err(|e| PortfolioError::validation("id", e.to_string()))?
            }
            None => CompanyId::generate(),
        };

        let mut extra = req.extra;
        // Insights are only ever written by the portfolio agent.
        extra.remove("aiInsights");

        let mut company = Company::new(id);
        company.name = req.name;
        company.stage = req.stage;
        company.investment = req.investment;
        company.health_score = req.health_score;
        company.extra = extra;
        Ok(company)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub message: &'static str,
    pub company: Company,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            message: "Company added successfully",
            company,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub company: Company,
    pub ai_insights: Option<Value>,
}

impl From<CompanyInsights> for InsightsResponse {
    fn from(found: CompanyInsights) -> Self {
        Self {
            company: found.company,
            ai_insights: found.insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn move_request_parses_stages() {
        let req: MoveCompanyRequest = serde_json::from_value(json!({
            "companyId": "c-1",
            "fromStage": "applicants",
            "toStage": "dueDiligence"
        }))
        .unwrap();

        let parsed = PipelineMove::try_from(req).unwrap();
        assert_eq!(parsed.company_id.as_str(), "c-1");
        assert_eq!(parsed.from, PipelineStage::Applicants);
        assert_eq!(parsed.to, PipelineStage::DueDiligence);
    }

    #[test]
    fn move_request_rejects_unknown_stage() {
        let req = MoveCompanyRequest {
            company_id: Some("c-1".into()),
            from_stage: Some("applicants".into()),
            to_stage: Some("closed".into()),
        };
        let err = PipelineMove::try_from(req).unwrap_err();
        assert!(err.message().contains("toStage"));
    }

    #[test]
    fn move_request_requires_company_id() {
        let req = MoveCompanyRequest {
            company_id: None,
            from_stage: Some("applicants".into()),
            to_stage: Some("invested".into()),
        };
        assert!(PipelineMove::try_from(req).is_err());
    }

    #[test]
    fn add_company_generates_missing_id_and_keeps_extra_fields() {
        let req: AddCompanyRequest = serde_json::from_value(json!({
            "name": "Acme",
            "stage": "Seed",
            "investment": 250000.0,
            "sector": "fintech",
            "aiInsights": {"healthScore": 99}
        }))
        .unwrap();

        let company = Company::try_from(req).unwrap();
        assert!(!company.id.as_str().is_empty());
        assert_eq!(company.name.as_deref(), Some("Acme"));
        assert_eq!(company.investment, Some(250000.0));
        assert_eq!(company.extra.get("sector"), Some(&json!("fintech")));
        assert!(company.ai_insights.is_none());
        assert!(!company.extra.contains_key("aiInsights"));
    }

    #[test]
    fn insights_response_uses_camel_case() {
        let company = Company::new(CompanyId::new("c-1").unwrap());
        let body = serde_json::to_value(InsightsResponse::from(CompanyInsights {
            company,
            insights: None,
        }))
        .unwrap();
        assert!(body.get("aiInsights").unwrap().is_null());
        assert_eq!(body["company"]["id"], "c-1");
    }
}
