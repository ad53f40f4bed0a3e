//! Multi-proportion evaluation built on `propeval_metrics`: precision curves
//! over a grid of proportions and per-proportion summary tables.

mod series;
mod table;

pub use series::{default_proportions, precision_at_proportions, PrecisionPoint};
pub use table::{
    evaluate_at_proportion, evaluate_at_proportions, EvaluationOptions, ProportionReport,
    ProportionRow,
};

use propeval_metrics::MetricsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("at least one proportion is required")]
    NoProportions,
}
