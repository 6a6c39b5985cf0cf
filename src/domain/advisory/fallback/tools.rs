//! Fixed tool catalog.

use crate::domain::advisory::inputs::ToolInput;
use crate::domain::advisory::outputs::{Tool, ToolRecommendations};

/// (category, name, provider, use case, complexity, cost, expected ROI)
const CATALOG: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "Development",
        "GitHub Copilot",
        "GitHub",
        "AI-powered code completion and development assistance",
        "Low",
        "$10-20/month",
        "Can reduce development time by 30-40%",
    ),
    (
        "Development",
        "Vercel",
        "Vercel",
        "Deployment and hosting for web applications",
        "Low",
        "$0-20/month (free tier available)",
        "Faster deployment cycles and improved developer experience",
    ),
    (
        "Analytics",
        "Google Analytics",
        "Google",
        "User behavior tracking and website analytics",
        "Low",
        "Free",
        "Essential for understanding user engagement and conversion",
    ),
    (
        "Analytics",
        "Mixpanel",
        "Mixpanel",
        "Product analytics and user journey tracking",
        "Medium",
        "$25-50/month",
        "Better insights into user behavior and feature usage",
    ),
    (
        "Marketing",
        "Mailchimp",
        "Mailchimp",
        "Email marketing and automation",
        "Low",
        "$0-15/month (free tier available)",
        "Automated email campaigns can increase engagement by 50%+",
    ),
    (
        "Marketing",
        "Buffer",
        "Buffer",
        "Social media management and scheduling",
        "Low",
        "$0-15/month",
        "Streamlined social media presence saves 5-10 hours/week",
    ),
    (
        "Operations",
        "Notion",
        "Notion",
        "Team collaboration and documentation",
        "Low",
        "$0-8/month (free tier available)",
        "Centralized knowledge base improves team productivity",
    ),
];

pub fn generate(input: &ToolInput) -> ToolRecommendations {
    let tools: Vec<Tool> = CATALOG
        .iter()
        .map(
            |(category, name, provider, use_case, complexity, cost, roi)| Tool {
                category: (*category).to_string(),
                name: (*name).to_string(),
                provider: (*provider).to_string(),
                use_case: (*use_case).to_string(),
                integration_complexity: (*complexity).to_string(),
                estimated_cost: (*cost).to_string(),
                expected_roi: (*roi).to_string(),
            },
        )
        .collect();

    let industry = if input.industry.trim().is_empty() {
        "startup"
    } else {
        input.industry.as_str()
    };
    let summary = format!(
        "Based on your {} profile, we recommend {} essential AI and automation tools. \
         These tools will help you automate development, track user behavior, manage marketing campaigns, \
         and streamline operations. Start with the free-tier options to validate, then scale up as needed.",
        industry,
        tools.len()
    );

    ToolRecommendations { tools, summary }
}
