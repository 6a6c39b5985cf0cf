//! Threshold-based metrics analysis.

use crate::domain::advisory::inputs::MetricsInput;
use crate::domain::advisory::outputs::{
    HealthAssessment, IndustryBenchmarks, MetricRecommendation, MetricsAnalysis,
};

pub const BASE_PMF_SCORE: u32 = 50;
pub const MAX_PMF_SCORE: u32 = 100;

const HEALTHY_LTV_CAC: f64 = 3.0;

pub fn generate(metrics: &MetricsInput) -> MetricsAnalysis {
    let mut health = HealthAssessment::Green;
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();

    if metrics.retention_rate < 30.0 {
        health = HealthAssessment::Red;
        concerns.push("Retention rate is below industry average (typically 40-60%)".to_string());
    } else if metrics.retention_rate >= 40.0 {
        strengths.push("Strong retention rate indicates good product-market fit".to_string());
    }

    if metrics.churn_rate > 10.0 {
        health = health.escalate();
        concerns.push("High churn rate suggests users aren't finding value".to_string());
    } else if metrics.churn_rate < 5.0 {
        strengths.push("Low churn rate shows strong user satisfaction".to_string());
    }

    let ratio = metrics.ltv_cac_ratio();
    if let Some(ratio) = ratio {
        if ratio < HEALTHY_LTV_CAC {
            health = health.escalate();
            concerns.push(format!(
                "LTV/CAC ratio is {:.1}x, ideally should be 3x or higher",
                ratio
            ));
        } else {
            strengths.push(format!(
                "Excellent LTV/CAC ratio of {:.1}x indicates sustainable unit economics",
                ratio
            ));
        }
    }

    if let Some(activation) = metrics.activation_rate() {
        if activation < 20.0 {
            concerns.push("Low activation rate - users may not be finding core value".to_string());
        } else if activation >= 40.0 {
            strengths
                .push("Good activation rate shows users are engaging with the product".to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push("Building early traction - continue focusing on user value".to_string());
    }
    if concerns.is_empty() {
        concerns.push("Early stage - metrics will improve as product matures".to_string());
    }

    MetricsAnalysis {
        health_assessment: health,
        pmf_score: pmf_score(metrics),
        strengths,
        concerns,
        recommendations: recommendations(metrics),
        industry_benchmarks: IndustryBenchmarks {
            retention_rate: "Industry average: 40-60% for SaaS".to_string(),
            cac: "Industry average: $50-200 depending on product".to_string(),
            ltv: "Industry average: $500-2000+ depending on pricing".to_string(),
        },
    }
}

fn pmf_score(metrics: &MetricsInput) -> u32 {
    let mut score = BASE_PMF_SCORE;
    if metrics.retention_rate >= 40.0 {
        score += 15;
    }
    if metrics.churn_rate < 5.0 {
        score += 15;
    }
    if metrics.ltv_cac_ratio().is_some_and(|r| r >= HEALTHY_LTV_CAC) {
        score += 20;
    }
    if metrics.revenue > 0.0 {
        score += 10;
    }
    score.min(MAX_PMF_SCORE)
}

fn recommendations(metrics: &MetricsInput) -> Vec<MetricRecommendation> {
    let mut recs = Vec::new();
    let mut push = |metric: &str, recommendation: &str| {
        recs.push(MetricRecommendation {
            metric: metric.to_string(),
            recommendation: recommendation.to_string(),
        })
    };

    if metrics.retention_rate < 40.0 {
        push(
            "Retention Rate",
            "Focus on onboarding improvements and delivering value in first week. Consider user interviews to understand drop-off points.",
        );
    }
    if metrics.churn_rate > 5.0 {
        push(
            "Churn Rate",
            "Implement exit surveys, improve customer success, and identify at-risk users before they churn.",
        );
    }
    if metrics.ltv_cac_ratio().is_some_and(|r| r < HEALTHY_LTV_CAC) {
        push(
            "LTV/CAC Ratio",
            "Optimize acquisition channels, improve conversion rates, or increase pricing to improve unit economics.",
        );
    }
    if metrics.revenue == 0.0 {
        push(
            "Revenue",
            "Focus on monetization strategy. Consider freemium model, usage-based pricing, or subscription tiers.",
        );
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(retention: f64, churn: f64, ltv: f64, cac: f64, revenue: f64) -> MetricsInput {
        MetricsInput {
            retention_rate: retention,
            churn_rate: churn,
            ltv,
            cac,
            revenue,
            ..Default::default()
        }
    }

    #[test]
    fn weak_retention_and_high_churn_is_red() {
        let result = generate(&metrics(20.0, 15.0, 0.0, 0.0, 0.0));

        assert_eq!(result.health_assessment, HealthAssessment::Red);
        assert_eq!(result.pmf_score, 50);
        assert_eq!(result.concerns.len(), 2);
        assert_eq!(
            result.strengths,
            vec!["Building early traction - continue focusing on user value".to_string()]
        );
    }

    #[test]
    fn strong_metrics_are_green_with_full_pmf() {
        let result = generate(&metrics(50.0, 2.0, 3000.0, 500.0, 10000.0));

        assert_eq!(result.health_assessment, HealthAssessment::Green);
        assert_eq!(result.pmf_score, 100);
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Excellent LTV/CAC ratio of 6.0x indicates sustainable unit economics"));
        assert_eq!(
            result.concerns,
            vec!["Early stage - metrics will improve as product matures".to_string()]
        );
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn middling_retention_with_poor_unit_economics_is_yellow() {
        let result = generate(&metrics(35.0, 4.0, 200.0, 100.0, 500.0));

        assert_eq!(result.health_assessment, HealthAssessment::Yellow);
        assert!(result
            .concerns
            .contains(&"LTV/CAC ratio is 2.0x, ideally should be 3x or higher".to_string()));
        let recs: Vec<&str> = result.recommendations.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(recs, vec!["Retention Rate", "LTV/CAC Ratio"]);
    }

    #[test]
    fn activation_rate_feeds_lists() {
        let low = generate(&MetricsInput {
            retention_rate: 45.0,
            total_users: 1000.0,
            active_users: 100.0,
            ..Default::default()
        });
        assert!(low
            .concerns
            .iter()
            .any(|c| c.starts_with("Low activation rate")));

        let high = generate(&MetricsInput {
            retention_rate: 45.0,
            total_users: 100.0,
            active_users: 60.0,
            ..Default::default()
        });
        assert!(high
            .strengths
            .iter()
            .any(|s| s.starts_with("Good activation rate")));
    }

    #[test]
    fn each_threshold_adds_at_most_one_entry() {
        let result = generate(&metrics(10.0, 30.0, 100.0, 100.0, 0.0));
        assert_eq!(result.concerns.len(), 3);
        assert_eq!(result.recommendations.len(), 4);
    }
}
