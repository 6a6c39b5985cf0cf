//! Journey module - the founder's 8-step venture-building program.
//!
//! Holds the step table, the journey aggregate with its merge-and-advance
//! rule, and journey errors.

mod aggregate;
mod errors;
mod step;

pub use aggregate::{Journey, COMPLETED_AT_FIELD};
pub use errors::JourneyError;
pub use step::{resolve_step, resolve_step_key, JourneyStep};
