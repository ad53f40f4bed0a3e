//! Cutoff computation and score binarization.
//!
//! Two binarization rules live here and they are intentionally different:
//! the rank-based rule keeps every score `>=` the cutoff (ties at the
//! boundary are all selected), while the quantile rule keeps only scores
//! strictly `>` the interpolated quantile.

use crate::error::{MetricsError, Result};
use crate::proportion::Proportion;

/// Copy of `scores` sorted from best to worst. NaN ranks ahead of every number.
pub(crate) fn sorted_descending(scores: &[f64]) -> Vec<f64> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted
}

/// Score of the last sample inside the top `proportion` of the population.
///
/// The result is always an element of `scores`. With `proportion = 0` the best
/// score is returned, not a sentinel, so a `>=` comparison against it still
/// selects at least one sample.
pub fn cutoff_score_at_top_proportion(scores: &[f64], proportion: f64) -> Result<f64> {
    let proportion = Proportion::named("top_proportion", proportion)?;
    cutoff_for(scores, proportion)
}

pub(crate) fn cutoff_for(scores: &[f64], proportion: Proportion) -> Result<f64> {
    if scores.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    let sorted = sorted_descending(scores);
    let index = proportion.cutoff_index(sorted.len());
    let cutoff = sorted[index];
    log::debug!(
        "cutoff at top {proportion}: index {index} of {}, score {cutoff}",
        sorted.len()
    );
    Ok(cutoff)
}

/// Map each score to `1` when it is at or above the top-proportion cutoff.
pub fn binarize_scores_at_top_proportion(scores: &[f64], proportion: f64) -> Result<Vec<u8>> {
    let proportion = Proportion::named("top_proportion", proportion)?;
    binarize_for(scores, proportion).map(|(binary, _)| binary)
}

/// Binarize and also hand back the cutoff used.
pub(crate) fn binarize_for(scores: &[f64], proportion: Proportion) -> Result<(Vec<u8>, f64)> {
    let cutoff = cutoff_for(scores, proportion)?;
    let binary = scores.iter().map(|&s| u8::from(s >= cutoff)).collect();
    Ok((binary, cutoff))
}

/// Map each score to `1` when it lies strictly above the `quantile` of `scores`.
pub fn binarize_scores_at_quantile(scores: &[f64], quantile: f64) -> Result<Vec<u8>> {
    let q = Proportion::named("quantile", quantile)?;
    let cutoff = quantile_of(scores, q)?;
    log::debug!("quantile {q} of {} scores: {cutoff}", scores.len());
    Ok(scores.iter().map(|&s| u8::from(s > cutoff)).collect())
}

/// Linearly interpolated quantile of `values`.
///
/// With `h = (n - 1) * q`, the result is `x[floor(h)] + frac(h) * (x[floor(h) + 1] - x[floor(h)])`
/// over the ascending sort. A NaN anywhere in the input yields NaN.
pub fn quantile(values: &[f64], q: f64) -> Result<f64> {
    let q = Proportion::named("quantile", q)?;
    quantile_of(values, q)
}

fn quantile_of(values: &[f64], q: Proportion) -> Result<f64> {
    if values.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    if values.iter().any(|v| v.is_nan()) {
        return Ok(f64::NAN);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * q.get();
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}
