use std::fmt;

use crate::error::{check_paired, Result};
use crate::label::count_labeled;
use crate::proportion::Proportion;

/// Result of [`labels_at`]: a raw count, or a fraction of all labeled samples.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LabelCount {
    Count(usize),
    Fraction(f64),
}

impl LabelCount {
    pub fn as_f64(self) -> f64 {
        match self {
            LabelCount::Count(n) => n as f64,
            LabelCount::Fraction(f) => f,
        }
    }
}

impl fmt::Display for LabelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelCount::Count(n) => write!(f, "{n}"),
            LabelCount::Fraction(v) => write!(f, "{v:.4}"),
        }
    }
}

/// Number of labeled (non-NaN) entries among the top `top_proportion` of
/// samples ranked by `y_score`.
///
/// The top slice holds `max(floor(n * p) - 1, 0) + 1` samples. Samples are
/// ranked by reversing a stable ascending sort, so among equal scores the
/// later index ranks first. With `normalize`, the count is divided by the
/// number of labeled entries in the whole of `y_true`.
pub fn labels_at(
    y_true: &[f64],
    y_score: &[f64],
    top_proportion: f64,
    normalize: bool,
) -> Result<LabelCount> {
    let proportion = Proportion::named("top_proportion", top_proportion)?;
    check_paired(y_true, y_score)?;

    let mut order: Vec<usize> = (0..y_score.len()).collect();
    order.sort_by(|&a, &b| y_score[a].total_cmp(&y_score[b]));
    order.reverse();

    let take = proportion.cutoff_index(order.len()) + 1;
    let in_top = order[..take]
        .iter()
        .filter(|&&i| !y_true[i].is_nan())
        .count();

    if !normalize {
        return Ok(LabelCount::Count(in_top));
    }

    let labeled = count_labeled(y_true);
    if labeled == 0 {
        log::warn!("no labeled samples in y_true; labels_at fraction reported as 0.0");
        return Ok(LabelCount::Fraction(0.0));
    }
    Ok(LabelCount::Fraction(in_top as f64 / labeled as f64))
}
