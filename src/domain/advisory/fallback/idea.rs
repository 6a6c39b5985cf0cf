//! Heuristic idea validation.

use crate::domain::advisory::inputs::IdeaInput;
use crate::domain::advisory::outputs::{Competitor, IdeaValidation};

use super::mentions_any;

pub const COMPETITOR_COUNT: usize = 5;
pub const BASE_SCORE: u32 = 60;
pub const MAX_SCORE: u32 = 95;

const TECH_WORDS: &[&str] = &[
    "tech", "software", "app", "platform", "digital", "ai", "ml", "automation",
];
const B2B_WORDS: &[&str] = &["business", "enterprise", "company", "organization"];
const B2C_WORDS: &[&str] = &["consumer", "user", "individual", "people", "customer"];

/// Known incumbents, grouped by the industry words that surface them.
const INCUMBENTS: &[(&[&str], &[(&str, &str)])] = &[
    (
        &["fintech", "payment", "banking", "finance"],
        &[
            ("Stripe", "Payment processing leader with extensive API integrations"),
            ("Square", "Point-of-sale and payment solutions for small businesses"),
            ("PayPal", "Established payment platform with global reach"),
        ],
    ),
    (
        &["ecommerce", "retail", "shopping", "marketplace"],
        &[
            ("Amazon", "Dominant e-commerce platform with massive infrastructure"),
            ("Shopify", "E-commerce platform for independent retailers"),
        ],
    ),
    (
        &["saas", "software", "platform", "tool"],
        &[
            ("Salesforce", "Enterprise CRM and cloud platform leader"),
            ("Microsoft 365", "Productivity suite and business tools"),
        ],
    ),
];

pub fn generate(input: &IdeaInput) -> IdeaValidation {
    let feasibility_score = feasibility_score(input);

    IdeaValidation {
        market_size: market_size(input),
        competitors: competitors(&input.problem_statement),
        feasibility_score,
        explanation: explanation(feasibility_score),
        risks: vec![
            "Market competition may be intense - differentiation is key".to_string(),
            "Customer acquisition could be challenging without clear value proposition"
                .to_string(),
            "Technical execution complexity may impact timeline".to_string(),
        ],
        recommendations: vec![
            "Conduct user interviews to validate the problem with your target audience"
                .to_string(),
            "Research direct and indirect competitors to identify gaps".to_string(),
            "Create a simple prototype or MVP to test core assumptions".to_string(),
            "Define clear success metrics for your first 100 customers".to_string(),
        ],
    }
}

fn market_size(input: &IdeaInput) -> String {
    let tech = mentions_any(&input.problem_statement, TECH_WORDS);
    let b2b = mentions_any(&input.target_audience, B2B_WORDS);
    let b2c = mentions_any(&input.target_audience, B2C_WORDS);

    let assessment = if tech && b2b {
        "significant, with enterprise software markets typically valued in the billions. B2B tech solutions have strong growth potential."
    } else if tech && b2c {
        "substantial, as consumer tech markets continue to expand rapidly. Mobile and digital solutions see high adoption rates."
    } else {
        "moderate to large depending on the specific niche. Traditional markets are evolving with digital transformation."
    };
    format!("The market size appears to be {}", assessment)
}

/// Matching incumbents first, then numbered placeholders; always exactly five.
fn competitors(problem_statement: &str) -> Vec<Competitor> {
    let mut competitors: Vec<Competitor> = INCUMBENTS
        .iter()
        .filter(|(words, _)| mentions_any(problem_statement, words))
        .flat_map(|(_, entries)| entries.iter())
        .map(|(name, description)| Competitor {
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect();

    while competitors.len() < COMPETITOR_COUNT {
        competitors.push(Competitor {
            name: format!("Competitor {}", competitors.len() + 1),
            description: "Established player in the market with significant resources"
                .to_string(),
        });
    }
    competitors.truncate(COMPETITOR_COUNT);
    competitors
}

fn feasibility_score(input: &IdeaInput) -> u32 {
    let unique = input.unique_value.to_lowercase();
    let mut score = BASE_SCORE;
    if input.problem_statement.chars().count() > 50 {
        score += 10;
    }
    if input.target_audience.chars().count() > 20 {
        score += 10;
    }
    if input.unique_value.chars().count() > 30 {
        score += 10;
    }
    if unique.contains("unique") || unique.contains("only") {
        score += 5;
    }
    score.min(MAX_SCORE)
}

fn explanation(score: u32) -> String {
    if score >= 70 {
        format!(
            "Your idea shows strong potential with {} clarity on the problem and solution. The market opportunity appears viable.",
            if score >= 80 { "excellent" } else { "good" }
        )
    } else if score >= 50 {
        "Your idea has potential but could benefit from more specific details about the problem, target audience, and unique value proposition.".to_string()
    } else {
        "Consider refining your idea with more specific details about the problem you're solving and who will benefit.".to_string()
    }
}
