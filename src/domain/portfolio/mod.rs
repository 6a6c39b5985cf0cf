//! Portfolio module - a VC's companies and deal pipeline.

mod aggregate;
mod analytics;
mod errors;
mod pipeline;

pub use aggregate::{Company, Portfolio};
pub use analytics::{PipelineCounts, PortfolioAnalytics, UNKNOWN_STAGE};
pub use errors::PortfolioError;
pub use pipeline::{Pipeline, PipelineEntry, PipelineStage};
