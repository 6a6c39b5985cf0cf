//! Templated market analysis narrative.

use crate::domain::advisory::inputs::MarketInput;

use super::mentions_any;

pub fn generate(input: &MarketInput) -> String {
    let industry = input
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let demand = if mentions_any(&input.problem_statement, &["automation"]) {
        "automation solutions"
    } else {
        "innovative solutions"
    };
    let adoption = if mentions_any(&input.target_audience, &["business"]) {
        "B2B"
    } else {
        "consumer"
    };

    format!(
        "Market Analysis for {heading} Industry:

Market Size and Growth: The market shows significant growth potential, especially in the {sector} sector. Digital transformation trends are driving adoption.

Key Market Trends:
- Increasing demand for {demand}
- Growing {adoption} adoption
- Shift toward cloud-based and scalable solutions

Target Customer Segments:
- Primary: {audience}
- Secondary: Adjacent markets with similar needs

Market Entry Barriers:
- Moderate competition from established players
- Need for clear differentiation
- Customer acquisition costs vary by channel

Growth Opportunities:
- Early adopter markets
- Underserved niches
- Strategic partnerships",
        heading = industry.unwrap_or("General"),
        sector = industry.unwrap_or("technology"),
        demand = demand,
        adoption = adoption,
        audience = input.target_audience,
    )
}
