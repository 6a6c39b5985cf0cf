//! Journey aggregate - a founder's progress through the program.

use serde_json::{Map, Value};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::JourneyStep;

/// Field stamped onto every step record when it is written.
pub const COMPLETED_AT_FIELD: &str = "completedAt";

/// A founder's journey.
///
/// `step_data` maps step keys (see [`JourneyStep::key`]) to free-form JSON
/// records. `current_step` never decreases; writes to earlier steps leave it
/// untouched, writes to later steps advance it.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    user_id: UserId,
    current_step: JourneyStep,
    step_data: Map<String, Value>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Journey {
    /// Starts a fresh journey at step 1 with no step data.
    pub fn start(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            user_id,
            current_step: JourneyStep::FIRST,
            step_data: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a journey from persisted columns.
    pub fn reconstitute(
        user_id: UserId,
        current_step: i64,
        step_data: Map<String, Value>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let current_step = JourneyStep::from_number(current_step).ok_or_else(|| {
            ValidationError::out_of_range("current_step", 1, 8, current_step)
        })?;
        Ok(Self {
            user_id,
            current_step,
            step_data,
            created_at,
            updated_at,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn current_step(&self) -> JourneyStep {
        self.current_step
    }

    pub fn step_data(&self) -> &Map<String, Value> {
        &self.step_data
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns the stored record for a step, if any.
    pub fn step_record(&self, step: JourneyStep) -> Option<&Value> {
        self.step_data.get(&step.key())
    }

    /// Shallow-merges `payload` into the step's record, stamps `completedAt`,
    /// and advances `current_step` to `max(current_step, step)`.
    ///
    /// Returns the merged record.
    pub fn record_step(
        &mut self,
        step: JourneyStep,
        payload: Map<String, Value>,
        at: Timestamp,
    ) -> &Value {
        let key = step.key();
        let mut record = match self.step_data.remove(&key) {
            Some(Value::Object(existing)) => existing,
            _ => Map::new(),
        };
        record.extend(payload);
        record.insert(
            COMPLETED_AT_FIELD.to_string(),
            Value::String(at.to_rfc3339()),
        );

        self.current_step = self.current_step.max(step);
        self.updated_at = at;
        self.step_data
            .entry(key)
            .or_insert(Value::Object(record))
    }
}
