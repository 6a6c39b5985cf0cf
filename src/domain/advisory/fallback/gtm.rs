//! Fixed go-to-market plan.

use crate::domain::advisory::inputs::GtmInput;
use crate::domain::advisory::outputs::{Channel, ContentStrategy, GoToMarketStrategy, LaunchPlan};

pub fn generate(_input: &GtmInput) -> GoToMarketStrategy {
    GoToMarketStrategy {
        channels: vec![
            channel(
                1,
                "Content Marketing",
                &[
                    "Create blog posts addressing target audience pain points",
                    "Develop SEO-optimized content",
                    "Publish case studies and success stories",
                ],
                "30%",
                "Organic traffic and thought leadership",
            ),
            channel(
                2,
                "Social Media",
                &[
                    "LinkedIn for B2B audience",
                    "Twitter/X for tech community engagement",
                    "Instagram for visual content if applicable",
                ],
                "20%",
                "Brand awareness and community building",
            ),
            channel(
                3,
                "Email Marketing",
                &[
                    "Welcome email sequences",
                    "Newsletter with valuable insights",
                    "Product updates and feature announcements",
                ],
                "15%",
                "Direct customer communication and retention",
            ),
            channel(
                4,
                "Paid Advertising",
                &[
                    "Google Ads for search intent",
                    "Facebook/Instagram ads for targeting",
                    "Retargeting campaigns",
                ],
                "35%",
                "Immediate traffic and conversions",
            ),
        ],
        content_strategy: ContentStrategy {
            themes: strings(&[
                "Problem-solving content",
                "Industry insights and trends",
                "Product tutorials and use cases",
            ]),
            formats: strings(&["Blog posts", "Video tutorials", "Infographics", "Webinars"]),
        },
        key_metrics: strings(&[
            "Customer Acquisition Cost (CAC)",
            "Lifetime Value (LTV)",
            "Conversion Rate",
            "Monthly Recurring Revenue (MRR)",
        ]),
        first_90_days: LaunchPlan {
            days_1_to_30: "Launch content marketing campaign, set up analytics tracking, begin social media presence, start building email list".to_string(),
            days_31_to_60: "Launch paid advertising campaigns, publish first case studies, engage with community, optimize conversion funnels".to_string(),
            days_61_to_90: "Scale successful channels, implement retargeting, expand content types, analyze and optimize based on data".to_string(),
        },
    }
}

fn channel(
    priority: u32,
    name: &str,
    tactics: &[&str],
    budget_allocation: &str,
    expected_results: &str,
) -> Channel {
    Channel {
        name: name.to_string(),
        priority,
        tactics: strings(tactics),
        budget_allocation: budget_allocation.to_string(),
        expected_results: expected_results.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
