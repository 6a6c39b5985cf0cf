//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, roles, errors)
//! - `journey` - Founder journey: step table, merge-and-advance rule
//! - `conversation` - Per-(user, tag) chat transcripts
//! - `portfolio` - VC companies, deal pipeline, analytics
//! - `advisory` - Response contracts, prompts, and fallback generators

pub mod advisory;
pub mod conversation;
pub mod foundation;
pub mod journey;
pub mod portfolio;
