//! Portfolio company review.
//!
//! Starts from a neutral 65 and moves with whatever metrics the company has
//! reported, so the follow-on call can land on any of Yes, Wait or No.

use serde_json::{Map, Value};

use crate::domain::advisory::inputs::PortfolioInput;
use crate::domain::advisory::lenient::number_field;
use crate::domain::advisory::outputs::{FollowOnRecommendation, PortfolioAnalysis, ScoreBreakdown};

pub const BASE_HEALTH_SCORE: i64 = 65;

pub fn generate(input: &PortfolioInput) -> PortfolioAnalysis {
    let health_score = health_score(&input.metrics_data);

    PortfolioAnalysis {
        health_score,
        score_breakdown: ScoreBreakdown {
            traction: 70,
            team: 65,
            market: 70,
            financials: 60,
        },
        highlights: vec![
            format!(
                "{} is showing {} stage traction",
                input.company_name, input.stage
            ),
            "Team has relevant experience in the industry".to_string(),
            "Market opportunity appears viable".to_string(),
        ],
        risk_factors: vec![
            "Early stage - metrics still developing".to_string(),
            "Need to validate unit economics".to_string(),
            "Market competition may intensify".to_string(),
        ],
        recommended_actions: vec![
            "Schedule monthly check-ins with founders".to_string(),
            "Track key metrics on dashboard".to_string(),
            "Provide strategic guidance on GTM strategy".to_string(),
            "Connect with relevant industry contacts".to_string(),
        ],
        follow_on_recommendation: FollowOnRecommendation::from_health_score(health_score),
        comparison: "Performing similarly to other portfolio companies at this stage".to_string(),
    }
}

/// Base score adjusted by each reported metric; absent metrics leave it alone.
fn health_score(metrics: &Map<String, Value>) -> u32 {
    let mut score = BASE_HEALTH_SCORE;

    if let Some(retention) = number_field(metrics, "retentionRate") {
        if retention >= 40.0 {
            score += 5;
        } else if retention < 30.0 {
            score -= 10;
        }
    }
    if let Some(churn) = number_field(metrics, "churnRate") {
        if churn < 5.0 {
            score += 5;
        } else if churn > 10.0 {
            score -= 10;
        }
    }
    if let (Some(ltv), Some(cac)) = (number_field(metrics, "ltv"), number_field(metrics, "cac")) {
        if ltv > 0.0 && cac > 0.0 {
            score += if ltv / cac >= 3.0 { 5 } else { -5 };
        }
    }
    if let Some(revenue) = number_field(metrics, "revenue") {
        if revenue > 0.0 {
            score += 5;
        }
    }
    if let Some(runway) = number_field(metrics, "runwayMonths") {
        if runway < 6.0 {
            score -= 5;
        }
    }

    score.clamp(0, 100) as u32
}
