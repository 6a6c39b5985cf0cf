//! Portfolio aggregate - one per VC user.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{CompanyId, Timestamp, UserId};

use super::{Pipeline, PipelineEntry, PipelineStage, PortfolioError};

/// A company tracked in a portfolio.
///
/// Only the fields the analytics and advisory paths read are typed; anything
/// else a client stores is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    pub fn new(id: CompanyId) -> Self {
        Self {
            id,
            name: None,
            stage: None,
            investment: None,
            health_score: None,
            ai_insights: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    user_id: UserId,
    companies: Vec<Company>,
    pipeline: Pipeline,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Portfolio {
    /// Opens an empty portfolio.
    pub fn open(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            user_id,
            companies: Vec::new(),
            pipeline: Pipeline::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a portfolio from persistence (no validation).
    pub fn reconstitute(
        user_id: UserId,
        companies: Vec<Company>,
        pipeline: Pipeline,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            companies,
            pipeline,
            created_at,
            updated_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    /// Adds a company and places it in the applicants bucket.
    pub fn add_company(&mut self, company: Company, at: Timestamp) -> Result<(), PortfolioError> {
        if self.company(&company.id).is_some() {
            return Err(PortfolioError::duplicate_company(company.id));
        }
        self.pipeline
            .place(PipelineStage::Applicants, PipelineEntry::new(company.id.clone(), at));
        self.companies.push(company);
        self.updated_at = at;
        Ok(())
    }

    /// Moves a company reference between buckets.
    ///
    /// Fails with `EntryNotInStage` when `from` does not hold the company.
    pub fn move_company(
        &mut self,
        id: &CompanyId,
        from: PipelineStage,
        to: PipelineStage,
        at: Timestamp,
    ) -> Result<(), PortfolioError> {
        self.pipeline
            .move_entry(id, from, to, at)
            .ok_or_else(|| PortfolioError::entry_not_in_stage(id.clone(), from))?;
        self.updated_at = at;
        Ok(())
    }

    /// Stores advisory insights on a company.
    pub fn record_insights(
        &mut self,
        id: &CompanyId,
        insights: Value,
        at: Timestamp,
    ) -> Result<(), PortfolioError> {
        let company = self
            .companies
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| PortfolioError::company_not_found(id.clone()))?;
        company.ai_insights = Some(insights);
        self.updated_at = at;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vc() -> UserId {
        UserId::new("vc-1").unwrap()
    }

    fn company(id: &str) -> Company {
        Company::new(CompanyId::new(id).unwrap())
    }

    #[test]
    fn company_round_trips_unknown_fields() {
        let value = json!({"id": "c1", "name": "Acme", "stage": "Seed", "founder": "Ada"});
        let parsed: Company = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(parsed.extra["founder"], "Ada");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
    }

    #[test]
    fn add_company_places_in_applicants() {
        let mut portfolio = Portfolio::open(vc());
        portfolio.add_company(company("c1"), Timestamp::now()).unwrap();

        assert_eq!(portfolio.companies().len(), 1);
        assert_eq!(
            portfolio.pipeline().stage_of(&CompanyId::new("c1").unwrap()),
            Some(PipelineStage::Applicants)
        );
    }

    #[test]
    fn add_company_rejects_duplicate_id() {
        let mut portfolio = Portfolio::open(vc());
        portfolio.add_company(company("c1"), Timestamp::now()).unwrap();

        let err = portfolio.add_company(company("c1"), Timestamp::now()).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateCompany(_)));
    }

    #[test]
    fn move_company_from_wrong_stage_is_not_found() {
        let mut portfolio = Portfolio::open(vc());
        portfolio.add_company(company("c1"), Timestamp::now()).unwrap();

        let err = portfolio
            .move_company(
                &CompanyId::new("c1").unwrap(),
                PipelineStage::Invested,
                PipelineStage::Applicants,
                Timestamp::now(),
            )
            .unwrap_err();
        assert!(matches!(err, PortfolioError::EntryNotInStage { .. }));
    }

    #[test]
    fn record_insights_requires_known_company() {
        let mut portfolio = Portfolio::open(vc());
        let err = portfolio
            .record_insights(&CompanyId::new("ghost").unwrap(), json!({}), Timestamp::now())
            .unwrap_err();
        assert!(matches!(err, PortfolioError::CompanyNotFound(_)));
    }

    #[test]
    fn record_insights_stores_on_company() {
        let mut portfolio = Portfolio::open(vc());
        portfolio.add_company(company("c1"), Timestamp::now()).unwrap();
        let id = CompanyId::new("c1").unwrap();

        portfolio
            .record_insights(&id, json!({"healthScore": 70}), Timestamp::now())
            .unwrap();

        assert_eq!(
            portfolio.company(&id).unwrap().ai_insights,
            Some(json!({"healthScore": 70}))
        );
    }
}
