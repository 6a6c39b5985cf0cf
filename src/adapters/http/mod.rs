//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router and state; `router` stitches them together
//! under `/api`.

pub mod advisory;
pub mod error;
pub mod founder;
pub mod middleware;
pub mod router;
pub mod vc;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, ApiServices, HttpSettings};
