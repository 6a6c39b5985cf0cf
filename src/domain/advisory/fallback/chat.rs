//! Canned chat replies keyed on the founder's wording.

use super::mentions_any;

const OPENING: &str = "I'd be happy to help you with that. ";

const TOPICS: &[(&[&str], &str)] = &[
    (
        &["idea", "validate"],
        "For idea validation, focus on clearly defining the problem you're solving, who experiences it, and why your solution is unique. Consider conducting user interviews to validate assumptions.",
    ),
    (
        &["market", "competition"],
        "Market analysis should include size, growth trends, and competitive landscape. Look for gaps in existing solutions that your product can fill.",
    ),
    (
        &["mvp", "features"],
        "For MVP, prioritize features that deliver core value. Start with 3-5 must-have features, then validate with users before adding more.",
    ),
    (
        &["funding", "investment"],
        "When seeking funding, prepare a clear pitch deck, financial projections, and traction metrics. Show progress on key milestones.",
    ),
    (
        &["launch", "go-to-market"],
        "For launch, focus on your target audience's preferred channels. Start with content marketing and direct outreach, then scale with paid channels.",
    ),
    (
        &["metrics", "analytics"],
        "Key metrics to track include user acquisition, retention, engagement, and revenue. Focus on metrics that indicate product-market fit.",
    ),
];

const GENERIC: &str = "Consider focusing on your core value proposition, understanding your target customers deeply, and iterating based on feedback. Would you like more specific advice on any particular aspect?";

/// First matching topic wins.
pub fn reply(message: &str) -> String {
    let advice = TOPICS
        .iter()
        .find(|(words, _)| mentions_any(message, words))
        .map(|(_, advice)| *advice)
        .unwrap_or(GENERIC);
    format!("{}{}", OPENING, advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_topic_keywords() {
        assert!(reply("How should I VALIDATE this?").contains("For idea validation"));
        assert!(reply("What MVP features first").contains("For MVP"));
        assert!(reply("Ready to launch soon").contains("For launch"));
    }

    #[test]
    fn earlier_topics_take_precedence() {
        assert!(reply("market for my idea").contains("For idea validation"));
    }

    #[test]
    fn unmatched_message_gets_generic_advice() {
        let text = reply("hello there");
        assert!(text.starts_with(OPENING));
        assert!(text.ends_with("any particular aspect?"));
    }
}
