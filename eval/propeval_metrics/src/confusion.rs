use crate::error::{check_paired, Result};
use crate::label::Label;
use crate::proportion::Proportion;
use crate::threshold::binarize_for;

/// Confusion-matrix cells for one top-proportion selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    #[cfg_attr(feature = "serde", serde(rename = "fn"))]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Tally (prediction, label) pairs. Labels that are missing or not binary
    /// match no cell.
    pub fn from_predictions(y_true: &[f64], y_pred: &[u8]) -> Self {
        let mut counts = Self::default();
        for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
            match (pred == 1, Label::from_f64(truth)) {
                (true, Label::Positive) => counts.tp += 1,
                (true, Label::Negative) => counts.fp += 1,
                (false, Label::Negative) => counts.tn += 1,
                (false, Label::Positive) => counts.fn_ += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn predicted_positive(&self) -> usize {
        self.tp + self.fp
    }

    /// `tp / (tp + fp)`, or `None` when nothing was predicted positive.
    pub fn precision(&self) -> Option<f64> {
        match self.predicted_positive() {
            0 => None,
            n => Some(self.tp as f64 / n as f64),
        }
    }

    /// `tp / (tp + fn)`, or `None` when there are no positive labels.
    pub fn recall(&self) -> Option<f64> {
        match self.tp + self.fn_ {
            0 => None,
            n => Some(self.tp as f64 / n as f64),
        }
    }
}

/// All four confusion counts for the top `top_proportion` selection of `y_score`.
pub fn confusion_at(y_true: &[f64], y_score: &[f64], top_proportion: f64) -> Result<ConfusionCounts> {
    let proportion = Proportion::named("top_proportion", top_proportion)?;
    check_paired(y_true, y_score)?;
    let (y_pred, _) = binarize_for(y_score, proportion)?;
    Ok(ConfusionCounts::from_predictions(y_true, &y_pred))
}

/// Samples predicted positive whose label is `1`.
pub fn tp_at(y_true: &[f64], y_score: &[f64], top_proportion: f64) -> Result<usize> {
    confusion_at(y_true, y_score, top_proportion).map(|c| c.tp)
}

/// Samples predicted positive whose label is `0`.
pub fn fp_at(y_true: &[f64], y_score: &[f64], top_proportion: f64) -> Result<usize> {
    confusion_at(y_true, y_score, top_proportion).map(|c| c.fp)
}

/// Samples predicted negative whose label is `0`.
pub fn tn_at(y_true: &[f64], y_score: &[f64], top_proportion: f64) -> Result<usize> {
    confusion_at(y_true, y_score, top_proportion).map(|c| c.tn)
}

/// Samples predicted negative whose label is `1`.
pub fn fn_at(y_true: &[f64], y_score: &[f64], top_proportion: f64) -> Result<usize> {
    confusion_at(y_true, y_score, top_proportion).map(|c| c.fn_)
}
