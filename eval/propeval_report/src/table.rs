use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use propeval_metrics::{
    confusion_at, count_labeled, labels_at, precision_at, ConfusionCounts, LabelCount,
};

use crate::series::validate_all;
use crate::ReportError;

/// How rows of a [`ProportionReport`] are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Score missing labels as predicted-negative negatives for precision.
    pub ignore_nas: bool,
    /// Report label coverage as a fraction of all labeled samples.
    pub normalize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionRow {
    pub proportion: f64,
    pub cutoff: f64,
    pub precision: f64,
    pub confusion: ConfusionCounts,
    pub labels: LabelCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionReport {
    pub n_samples: usize,
    pub n_labeled: usize,
    pub options: EvaluationOptions,
    pub rows: Vec<ProportionRow>,
}

pub fn evaluate_at_proportion(
    y_true: &[f64],
    y_score: &[f64],
    proportion: f64,
    options: EvaluationOptions,
) -> Result<ProportionRow, ReportError> {
    let (precision, cutoff) = precision_at(y_true, y_score, proportion, options.ignore_nas)?;
    let confusion = confusion_at(y_true, y_score, proportion)?;
    let labels = labels_at(y_true, y_score, proportion, options.normalize)?;
    Ok(ProportionRow {
        proportion,
        cutoff,
        precision,
        confusion,
        labels,
    })
}

pub fn evaluate_at_proportions(
    y_true: &[f64],
    y_score: &[f64],
    proportions: &[f64],
    options: EvaluationOptions,
) -> Result<ProportionReport, ReportError> {
    validate_all(proportions)?;
    let rows = proportions
        .iter()
        .map(|&p| evaluate_at_proportion(y_true, y_score, p, options))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "evaluated {} proportions over {} samples",
        rows.len(),
        y_score.len()
    );
    Ok(ProportionReport {
        n_samples: y_score.len(),
        n_labeled: count_labeled(y_true),
        options,
        rows,
    })
}

impl ProportionReport {
    /// Plain aligned table, one line per proportion.
    pub fn to_text(&self) -> String {
        let labels_header = if self.options.normalize {
            "labeled_frac"
        } else {
            "labeled"
        };
        let mut out = String::new();
        let _ = writeln!(
            out,
            "samples: {}  labeled: {}  ignore_nas: {}",
            self.n_samples, self.n_labeled, self.options.ignore_nas
        );
        let _ = writeln!(
            out,
            "{:>10} {:>12} {:>10} {:>6} {:>6} {:>6} {:>6} {:>12}",
            "top", "cutoff", "precision", "tp", "fp", "tn", "fn", labels_header
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>10.4} {:>12.6} {:>10.4} {:>6} {:>6} {:>6} {:>6} {:>12}",
                row.proportion,
                row.cutoff,
                row.precision,
                row.confusion.tp,
                row.confusion.fp,
                row.confusion.tn,
                row.confusion.fn_,
                row.labels.to_string(),
            );
        }
        out
    }
}
