//! Fixed MVP plan.

use crate::domain::advisory::inputs::MvpInput;
use crate::domain::advisory::outputs::{
    DeferredFeature, MvpGuidance, MvpTimeline, PrioritizedFeature, TechChoice, TechnicalRisk,
};

pub fn generate(_input: &MvpInput) -> MvpGuidance {
    MvpGuidance {
        must_have_features: vec![
            must_have(1, "User Authentication", "Essential for user accounts and personalization"),
            must_have(2, "Core Value Delivery", "The main feature that solves your stated problem"),
            must_have(3, "Basic Dashboard", "Allows users to see and interact with their data"),
        ],
        nice_to_have_features: vec![
            deferred("Advanced Analytics", "Can be added in v2 after validating core features"),
            deferred("Social Features", "Nice to have but not essential for MVP validation"),
            deferred("Mobile App", "Web version first, then mobile if needed"),
        ],
        tech_stack: vec![
            tech("React or Vue.js", "Modern frontend framework for fast development"),
            tech("Node.js + Express", "JavaScript backend for full-stack consistency"),
            tech("PostgreSQL", "Reliable relational database for structured data"),
        ],
        timeline: MvpTimeline {
            weeks_1_to_4: "Weeks 1-4: Set up development environment, build core infrastructure, implement user authentication, and develop the primary feature that delivers value.".to_string(),
            weeks_5_to_8: "Weeks 5-8: Build dashboard, implement basic UI/UX, add essential integrations, and begin internal testing.".to_string(),
            weeks_9_to_12: "Weeks 9-12: User testing, bug fixes, performance optimization, and prepare for beta launch.".to_string(),
        },
        technical_risks: vec![
            risk(
                "Scope creep adding unnecessary features",
                "Stick strictly to MVP feature list, use feature flags for future additions",
            ),
            risk(
                "Technical debt from rushing",
                "Code reviews, basic testing, and refactoring time built into schedule",
            ),
            risk(
                "Third-party API dependencies",
                "Have fallback options and mock data for development",
            ),
        ],
    }
}

fn must_have(priority: u32, feature: &str, rationale: &str) -> PrioritizedFeature {
    PrioritizedFeature {
        feature: feature.to_string(),
        priority,
        rationale: rationale.to_string(),
    }
}

fn deferred(feature: &str, rationale: &str) -> DeferredFeature {
    DeferredFeature {
        feature: feature.to_string(),
        rationale: rationale.to_string(),
    }
}

fn tech(technology: &str, rationale: &str) -> TechChoice {
    TechChoice {
        technology: technology.to_string(),
        rationale: rationale.to_string(),
    }
}

fn risk(risk: &str, mitigation: &str) -> TechnicalRisk {
    TechnicalRisk {
        risk: risk.to_string(),
        mitigation: mitigation.to_string(),
    }
}
