use thiserror::Error;

/// Errors raised by the thresholding and metric functions.
///
/// Every variant describes a problem with the caller's input; nothing here is
/// recoverable inside the crate and no function returns partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("{name} must be a proportion in [0, 1], got {value}")]
    InvalidProportion { name: &'static str, value: String },

    #[error("input vector is empty")]
    EmptyInput,

    #[error("y_true has {labels} entries but y_score has {scores}")]
    LengthMismatch { labels: usize, scores: usize },

    #[error("missing label at index {index}; pass ignore_nas to treat it as negative")]
    MissingLabel { index: usize },

    #[error("label {value} at index {index} is not binary (expected 0 or 1)")]
    NonBinaryLabel { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Shared shape check for the paired-vector operations.
pub(crate) fn check_paired(y_true: &[f64], y_score: &[f64]) -> Result<()> {
    if y_true.len() != y_score.len() {
        return Err(MetricsError::LengthMismatch {
            labels: y_true.len(),
            scores: y_score.len(),
        });
    }
    if y_score.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    Ok(())
}
