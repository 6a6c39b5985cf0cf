//! JourneyStep enum representing the 8 venture-building steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::JourneyError;

/// The 8 steps of the founder journey, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStep {
    Onboarding,
    Idea,
    AiSuite,
    Mvp,
    Testing,
    Gtm,
    Pmf,
    Success,
}

impl JourneyStep {
    pub const FIRST: JourneyStep = JourneyStep::Onboarding;

    /// Returns all steps in program order.
    pub fn all() -> &'static [JourneyStep] {
        &[
            JourneyStep::Onboarding,
            JourneyStep::Idea,
            JourneyStep::AiSuite,
            JourneyStep::Mvp,
            JourneyStep::Testing,
            JourneyStep::Gtm,
            JourneyStep::Pmf,
            JourneyStep::Success,
        ]
    }

    /// 1-based step number.
    pub fn number(&self) -> i32 {
        match self {
            JourneyStep::Onboarding => 1,
            JourneyStep::Idea => 2,
            JourneyStep::AiSuite => 3,
            JourneyStep::Mvp => 4,
            JourneyStep::Testing => 5,
            JourneyStep::Gtm => 6,
            JourneyStep::Pmf => 7,
            JourneyStep::Success => 8,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: i64) -> Option<JourneyStep> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::all().get(idx).copied())
    }

    /// Short name used inside storage keys.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyStep::Onboarding => "onboarding",
            JourneyStep::Idea => "idea",
            JourneyStep::AiSuite => "aiSuite",
            JourneyStep::Mvp => "mvp",
            JourneyStep::Testing => "testing",
            JourneyStep::Gtm => "gtm",
            JourneyStep::Pmf => "pmf",
            JourneyStep::Success => "success",
        }
    }

    /// Key under which this step's record lives in the journey's step data,
    /// e.g. `step2_idea`.
    pub fn key(&self) -> String {
        format!("step{}_{}", self.number(), self.name())
    }

    /// Conversation tag for chat threads attached to this step, e.g. `step4`.
    pub fn conversation_tag(&self) -> String {
        format!("step{}", self.number())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JourneyStep::Onboarding => "Onboarding",
            JourneyStep::Idea => "Idea Validation",
            JourneyStep::AiSuite => "AI Tool Suite",
            JourneyStep::Mvp => "MVP Development",
            JourneyStep::Testing => "User Testing",
            JourneyStep::Gtm => "Go-to-Market",
            JourneyStep::Pmf => "Product-Market Fit",
            JourneyStep::Success => "Success",
        }
    }
}

impl fmt::Display for JourneyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolves a requested step number; numbers outside 1..=8 are rejected.
pub fn resolve_step(number: i64) -> Result<JourneyStep, JourneyError> {
    JourneyStep::from_number(number).ok_or_else(|| JourneyError::invalid_step(number))
}

/// Resolves a raw step number to the key its record is stored under.
pub fn resolve_step_key(number: i64) -> Result<String, JourneyError> {
    resolve_step(number).map(|step| step.key())
}
