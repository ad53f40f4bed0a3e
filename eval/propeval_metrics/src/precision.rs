use crate::error::{check_paired, MetricsError, Result};
use crate::label::Label;
use crate::proportion::Proportion;
use crate::threshold::binarize_for;

/// Binary precision, `tp / (tp + fp)`, over index-aligned labels and predictions.
///
/// Every label must be `0` or `1`. When nothing is predicted positive the
/// precision is `0.0`.
pub fn precision(y_true: &[f64], y_pred: &[u8]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            labels: y_true.len(),
            scores: y_pred.len(),
        });
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    for (index, (&truth, &pred)) in y_true.iter().zip(y_pred.iter()).enumerate() {
        let label = match Label::from_f64(truth) {
            Label::Missing => return Err(MetricsError::MissingLabel { index }),
            Label::Other(value) => return Err(MetricsError::NonBinaryLabel { index, value }),
            label => label,
        };
        if pred == 1 {
            if label == Label::Positive {
                tp += 1;
            } else {
                fp += 1;
            }
        }
    }

    if tp + fp == 0 {
        log::warn!("precision is ill-defined with no predicted positives; returning 0.0");
        return Ok(0.0);
    }
    Ok(tp as f64 / (tp + fp) as f64)
}

/// Precision of the predictions made by selecting the top `top_proportion`
/// of `y_score`, together with the cutoff score that selection used.
///
/// With `ignore_nas`, every missing label is scored as a negative that was
/// predicted negative, so it adds to neither tp nor fp. Without it a missing
/// label is an error.
pub fn precision_at(
    y_true: &[f64],
    y_score: &[f64],
    top_proportion: f64,
    ignore_nas: bool,
) -> Result<(f64, f64)> {
    let proportion = Proportion::named("top_proportion", top_proportion)?;
    check_paired(y_true, y_score)?;

    let (y_pred, cutoff) = binarize_for(y_score, proportion)?;
    let value = if ignore_nas {
        precision_ignoring_nas(y_true, &y_pred)?
    } else {
        precision(y_true, &y_pred)?
    };
    Ok((value, cutoff))
}

fn precision_ignoring_nas(y_true: &[f64], y_pred: &[u8]) -> Result<f64> {
    let mut y_true = y_true.to_vec();
    let mut y_pred = y_pred.to_vec();
    let mut replaced = 0usize;
    for (truth, pred) in y_true.iter_mut().zip(y_pred.iter_mut()) {
        if truth.is_nan() {
            *truth = 0.0;
            *pred = 0;
            replaced += 1;
        }
    }
    if replaced > 0 {
        log::debug!("ignoring {replaced} missing labels for precision");
    }
    precision(&y_true, &y_pred)
}
