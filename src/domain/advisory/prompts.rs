//! Prompt text for the generative backend.
//!
//! Wording is free to change; the JSON shapes each prompt asks for are pinned
//! by the types in `outputs`.

use serde_json::{Map, Value};

use super::inputs::{
    GtmInput, IdeaInput, MarketInput, MetricsInput, MvpInput, PortfolioInput, ToolInput,
    NOT_SPECIFIED,
};

pub const IDEA_SYSTEM: &str = "You are a startup validation expert. Always return valid JSON.";
pub const TOOLS_SYSTEM: &str = "You are an AI tools consultant. Always return valid JSON.";
pub const MVP_SYSTEM: &str = "You are a technical product advisor. Always return valid JSON.";
pub const GTM_SYSTEM: &str = "You are a go-to-market strategy expert. Always return valid JSON.";
pub const METRICS_SYSTEM: &str = "You are a startup metrics analyst. Always return valid JSON.";
pub const PORTFOLIO_SYSTEM: &str = "You are a venture capital analyst. Always return valid JSON.";
pub const MARKET_SYSTEM: &str =
    "You are a market research analyst specializing in startup market analysis.";
pub const CHAT_SYSTEM: &str =
    "You are a helpful startup advisor and business consultant. Provide actionable, specific advice.";

fn or_not_specified(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NOT_SPECIFIED)
}

fn json_list(values: &[Value]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Formats a metric for a prompt; zero reads as "N/A".
fn metric(value: f64) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

pub fn idea(input: &IdeaInput) -> String {
    format!(
        r#"You are an experienced startup advisor and market analyst.

A founder has submitted the following startup idea:

Problem Statement: {problem}

Target Audience: {audience}

Unique Value Proposition: {unique}

Please provide a comprehensive analysis in the following JSON format:
{{
  "marketSize": "Detailed market size estimation and growth potential",
  "competitors": [
    {{"name": "Competitor 1", "description": "How they differ and compete"}},
    {{"name": "Competitor 2", "description": "How they differ and compete"}},
    {{"name": "Competitor 3", "description": "How they differ and compete"}},
    {{"name": "Competitor 4", "description": "How they differ and compete"}},
    {{"name": "Competitor 5", "description": "How they differ and compete"}}
  ],
  "feasibilityScore": 75,
  "explanation": "Detailed explanation of the feasibility score",
  "risks": ["Risk 1", "Risk 2", "Risk 3"],
  "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
}}

Be encouraging but realistic. Provide actionable insights. Return ONLY valid JSON."#,
        problem = input.problem_statement,
        audience = input.target_audience,
        unique = input.unique_value,
    )
}

pub fn tools(input: &ToolInput) -> String {
    format!(
        r#"Based on this startup profile:

Industry: {industry}
Problem: {problem}
Target Users: {audience}
MVP Features: {features}

Recommend specific AI tools and services for:
1. Development automation
2. Customer analytics
3. Marketing automation
4. Operations optimization

Provide response in JSON format:
{{
  "tools": [
    {{
      "category": "Development",
      "name": "Tool Name",
      "provider": "Provider Name",
      "useCase": "Specific use case for this startup",
      "integrationComplexity": "Low/Medium/High",
      "estimatedCost": "$X/month",
      "expectedROI": "Expected return on investment"
    }}
  ],
  "summary": "Overall recommendation summary"
}}

Return ONLY valid JSON."#,
        industry = input.industry,
        problem = or_not_specified(input.problem_statement.as_deref()),
        audience = or_not_specified(input.target_audience.as_deref()),
        features = json_list(&input.features),
    )
}

pub fn mvp(input: &MvpInput) -> String {
    format!(
        r#"You are a technical product advisor. Help prioritize MVP features.

Startup Context:
- Problem: {problem}
- Target Users: {audience}
- Timeline: {timeline}
- Proposed Features: {features}

Provide response in JSON format:
{{
  "mustHaveFeatures": [
    {{"feature": "Feature name", "priority": 1, "rationale": "Why it's essential"}}
  ],
  "niceToHaveFeatures": [
    {{"feature": "Feature name", "rationale": "Why it can wait"}}
  ],
  "techStack": [
    {{"technology": "Tech name", "rationale": "Why it's recommended"}}
  ],
  "timeline": {{
    "weeks1-4": "Tasks for weeks 1-4",
    "weeks5-8": "Tasks for weeks 5-8",
    "weeks9-12": "Tasks for weeks 9-12"
  }},
  "technicalRisks": [
    {{"risk": "Risk description", "mitigation": "How to mitigate"}}
  ]
}}

Return ONLY valid JSON."#,
        problem = or_not_specified(input.problem_statement.as_deref()),
        audience = or_not_specified(input.target_audience.as_deref()),
        timeline = input.timeline,
        features = json_list(&input.proposed_features),
    )
}

pub fn gtm(input: &GtmInput) -> String {
    format!(
        r#"Create a go-to-market strategy for:

Product: {product}
Target Market: {audience}
Budget: {budget}
Timeline: {timeline}

Provide response in JSON format:
{{
  "channels": [
    {{
      "name": "Channel name",
      "priority": 1,
      "tactics": ["Tactic 1", "Tactic 2"],
      "budgetAllocation": "X%",
      "expectedResults": "What to expect"
    }}
  ],
  "contentStrategy": {{
    "themes": ["Theme 1", "Theme 2"],
    "formats": ["Format 1", "Format 2"]
  }},
  "keyMetrics": ["Metric 1", "Metric 2", "Metric 3"],
  "first90Days": {{
    "days1-30": "Action plan for days 1-30",
    "days31-60": "Action plan for days 31-60",
    "days61-90": "Action plan for days 61-90"
  }}
}}

Return ONLY valid JSON."#,
        product = or_not_specified(input.product_description.as_deref()),
        audience = or_not_specified(input.target_audience.as_deref()),
        budget = input.marketing_budget,
        timeline = input.launch_timeline,
    )
}

pub fn metrics(input: &MetricsInput) -> String {
    format!(
        r#"Analyze these startup metrics:

User Metrics:
- Total Users: {total}
- Active Users (30d): {active}
- Retention Rate: {retention}
- Churn Rate: {churn}

Business Metrics:
- Revenue: {revenue}
- CAC: {cac}
- LTV: {ltv}
- Burn Rate: {burn}

Provide response in JSON format:
{{
  "healthAssessment": "Red/Yellow/Green",
  "pmfScore": 75,
  "strengths": ["Strength 1", "Strength 2"],
  "concerns": ["Concern 1", "Concern 2"],
  "recommendations": [
    {{"metric": "Metric name", "recommendation": "How to improve"}}
  ],
  "industryBenchmarks": {{
    "retentionRate": "Industry average: X%",
    "cac": "Industry average: $X",
    "ltv": "Industry average: $X"
  }}
}}

Return ONLY valid JSON."#,
        total = metric(input.total_users),
        active = metric(input.active_users),
        retention = metric(input.retention_rate),
        churn = metric(input.churn_rate),
        revenue = metric(input.revenue),
        cac = metric(input.cac),
        ltv = metric(input.ltv),
        burn = metric(input.burn_rate),
    )
}

pub fn portfolio(input: &PortfolioInput) -> String {
    format!(
        r#"As a venture capital analyst, review this portfolio company:

Company: {company}
Stage: {stage}
Metrics: {metrics}
Last Review: {last_review}

Provide response in JSON format:
{{
  "healthScore": 75,
  "scoreBreakdown": {{
    "traction": 80,
    "team": 70,
    "market": 75,
    "financials": 70
  }},
  "highlights": ["Highlight 1", "Highlight 2"],
  "riskFactors": ["Risk 1", "Risk 2"],
  "recommendedActions": ["Action 1", "Action 2"],
  "followOnRecommendation": "Yes/No/Wait",
  "comparison": "Comparison to similar portfolio companies"
}}

Return ONLY valid JSON."#,
        company = input.company_name,
        stage = input.stage,
        metrics = json_object(&input.metrics_data),
        last_review = input.last_review_date.as_deref().unwrap_or("N/A"),
    )
}

pub fn market(input: &MarketInput) -> String {
    format!(
        r#"Analyze the market for this startup idea:

Problem: {problem}
Target Audience: {audience}
Industry: {industry}

Provide:
1. Market size and growth potential
2. Key market trends
3. Target customer segments
4. Market entry barriers
5. Growth opportunities"#,
        problem = input.problem_statement,
        audience = input.target_audience,
        industry = or_not_specified(input.industry.as_deref()),
    )
}

fn json_object(map: &Map<String, Value>) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn idea_prompt_embeds_fields_and_shape() {
        let prompt = idea(&IdeaInput {
            problem_statement: "Invoices are slow".into(),
            target_audience: "Small businesses".into(),
            unique_value: "One-click".into(),
        });

        assert!(prompt.contains("Problem Statement: Invoices are slow"));
        assert!(prompt.contains("\"feasibilityScore\": 75"));
        assert!(prompt.ends_with("Return ONLY valid JSON."));
    }

    #[test]
    fn missing_optional_fields_read_not_specified() {
        let prompt = gtm(&GtmInput {
            product_description: None,
            target_audience: Some("  ".into()),
            marketing_budget: "Not specified".into(),
            launch_timeline: "8-12 weeks".into(),
        });
        assert!(prompt.contains("Product: Not specified"));
        assert!(prompt.contains("Target Market: Not specified"));
    }

    #[test]
    fn metrics_prompt_marks_zero_as_unavailable() {
        let prompt = metrics(&MetricsInput {
            retention_rate: 42.0,
            ..Default::default()
        });
        assert!(prompt.contains("Retention Rate: 42"));
        assert!(prompt.contains("Churn Rate: N/A"));
    }

    #[test]
    fn tools_prompt_serializes_features() {
        let prompt = tools(&ToolInput {
            industry: "Fintech".into(),
            problem_statement: None,
            target_audience: None,
            features: vec![json!("payments")],
        });
        assert!(prompt.contains("MVP Features: [\"payments\"]"));
    }
}
