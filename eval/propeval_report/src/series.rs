use serde::{Deserialize, Serialize};

use propeval_metrics::{precision_at, validate_proportion};

use crate::ReportError;

/// One point of a precision-versus-proportion curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionPoint {
    pub proportion: f64,
    pub precision: f64,
    pub cutoff: f64,
}

/// `0.01, 0.02, ..., 1.00`.
pub fn default_proportions() -> Vec<f64> {
    (1..=100).map(|i| i as f64 / 100.0).collect()
}

/// Check every proportion up front so a bad entry fails the whole request
/// before any point is computed.
pub(crate) fn validate_all(proportions: &[f64]) -> Result<(), ReportError> {
    if proportions.is_empty() {
        return Err(ReportError::NoProportions);
    }
    for &p in proportions {
        validate_proportion(p)?;
    }
    Ok(())
}

/// Precision and cutoff at each of `proportions`, in the order given.
pub fn precision_at_proportions(
    y_true: &[f64],
    y_score: &[f64],
    proportions: &[f64],
    ignore_nas: bool,
) -> Result<Vec<PrecisionPoint>, ReportError> {
    validate_all(proportions)?;
    log::debug!(
        "computing precision at {} proportions over {} samples",
        proportions.len(),
        y_score.len()
    );
    proportions
        .iter()
        .map(|&proportion| -> Result<PrecisionPoint, ReportError> {
            let (precision, cutoff) = precision_at(y_true, y_score, proportion, ignore_nas)?;
            Ok(PrecisionPoint {
                proportion,
                precision,
                cutoff,
            })
        })
        .collect()
}
