//! Advisory orchestration: backend-or-fallback routing for every advisory
//! domain, chat, and market analysis.

mod router;

pub use router::{
    AdviceSource, Advised, AdvisoryRouter, AdvisorySettings, FallbackReason, MARKET_MAX_TOKENS,
};
