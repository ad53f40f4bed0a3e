pub mod config;
pub mod error;
pub mod input;

use serde_json::{json, Value as JsonValue};

use propeval_metrics::{
    binarize_scores_at_quantile, binarize_scores_at_top_proportion, confusion_at,
    cutoff_score_at_top_proportion, labels_at, precision_at,
};
use propeval_report::{default_proportions, evaluate_at_proportions, EvaluationOptions};

pub use config::EvalConfig;
pub use error::CliError;
pub use input::{read_input, EvalInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Result of a command in both output forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub json: JsonValue,
}

impl Rendered {
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Text => self.text.clone(),
            OutputMode::Json => {
                serde_json::to_string_pretty(&self.json).unwrap_or_else(|_| self.json.to_string())
            }
        }
    }
}

fn binary_text(binary: &[u8]) -> String {
    binary
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cutoff(input: &EvalInput, proportion: f64) -> Result<Rendered, CliError> {
    let value = cutoff_score_at_top_proportion(&input.y_score, proportion)?;
    Ok(Rendered {
        text: format!("{value}"),
        json: json!({ "top_proportion": proportion, "cutoff": value }),
    })
}

/// How `binarize` picks its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinarizeRule {
    TopProportion(f64),
    Quantile(f64),
}

pub fn binarize(input: &EvalInput, rule: BinarizeRule) -> Result<Rendered, CliError> {
    let (binary, json) = match rule {
        BinarizeRule::TopProportion(p) => {
            let binary = binarize_scores_at_top_proportion(&input.y_score, p)?;
            let json = json!({ "top_proportion": p, "y_pred": binary });
            (binary, json)
        }
        BinarizeRule::Quantile(q) => {
            let binary = binarize_scores_at_quantile(&input.y_score, q)?;
            let json = json!({ "quantile": q, "y_pred": binary });
            (binary, json)
        }
    };
    Ok(Rendered {
        text: binary_text(&binary),
        json,
    })
}

pub fn precision(
    input: &EvalInput,
    proportion: f64,
    ignore_nas: bool,
) -> Result<Rendered, CliError> {
    let (value, cutoff) = precision_at(input.labels()?, &input.y_score, proportion, ignore_nas)?;
    Ok(Rendered {
        text: format!("precision: {value:.4}\ncutoff: {cutoff}"),
        json: json!({
            "top_proportion": proportion,
            "ignore_nas": ignore_nas,
            "precision": value,
            "cutoff": cutoff,
        }),
    })
}

pub fn confusion(input: &EvalInput, proportion: f64) -> Result<Rendered, CliError> {
    let counts = confusion_at(input.labels()?, &input.y_score, proportion)?;
    Ok(Rendered {
        text: format!(
            "tp: {}\nfp: {}\ntn: {}\nfn: {}",
            counts.tp, counts.fp, counts.tn, counts.fn_
        ),
        json: json!({ "top_proportion": proportion, "confusion": counts }),
    })
}

pub fn labels(input: &EvalInput, proportion: f64, normalize: bool) -> Result<Rendered, CliError> {
    let count = labels_at(input.labels()?, &input.y_score, proportion, normalize)?;
    Ok(Rendered {
        text: count.to_string(),
        json: json!({ "top_proportion": proportion, "normalize": normalize, "labels": count }),
    })
}

/// Command-line overrides applied on top of an [`EvalConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOverrides {
    pub proportions: Vec<f64>,
    pub ignore_nas: bool,
    pub normalize: bool,
}

impl EvalConfig {
    /// Flags win over the file: explicit proportions replace the configured
    /// list, boolean flags can only switch an option on.
    pub fn merged(mut self, overrides: &ReportOverrides) -> Self {
        if !overrides.proportions.is_empty() {
            self.proportions = overrides.proportions.clone();
        }
        self.ignore_nas |= overrides.ignore_nas;
        self.normalize |= overrides.normalize;
        self
    }
}

pub fn report(input: &EvalInput, config: &EvalConfig) -> Result<Rendered, CliError> {
    let proportions = if config.proportions.is_empty() {
        default_proportions()
    } else {
        config.proportions.clone()
    };
    let options = EvaluationOptions {
        ignore_nas: config.ignore_nas,
        normalize: config.normalize,
    };
    let report = evaluate_at_proportions(input.labels()?, &input.y_score, &proportions, options)?;
    Ok(Rendered {
        text: report.to_text(),
        json: serde_json::to_value(&report).map_err(CliError::Output)?,
    })
}
