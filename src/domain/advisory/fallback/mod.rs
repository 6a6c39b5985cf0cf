//! Fallback generators.
//!
//! Pure, deterministic producers of every advisory shape. They never call out
//! and never fail; the router uses them whenever the generative backend is
//! absent, slow, failing, or returns something that breaks its contract.

pub mod chat;
pub mod gtm;
pub mod idea;
pub mod market;
pub mod metrics;
pub mod mvp;
pub mod portfolio;
pub mod tools;

/// Case-insensitive substring match against any of `words`.
pub(crate) fn mentions_any(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words.iter().any(|w| lower.contains(w))
}
