//! BAT-VC Studio - venture-building journey engine and AI advisory backend.
//!
//! Founders walk a fixed eight-step journey and get structured guidance at
//! each step; VCs track companies through a four-bucket deal pipeline and get
//! portfolio analytics and per-company health insights. Every advisory call
//! goes to the generative backend when one is configured and falls back to a
//! deterministic generator otherwise.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
