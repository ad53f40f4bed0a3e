use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use serde::Deserialize;

use propeval_metrics::Label;

use crate::error::CliError;

/// Scores and optional labels as read from JSON.
///
/// `y_true` entries may be `null` for samples without ground truth; they are
/// decoded to NaN, the missing-label marker the metrics expect.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalInput {
    #[serde(default, deserialize_with = "labels_with_nulls")]
    pub y_true: Option<Vec<f64>>,
    pub y_score: Vec<f64>,
}

fn labels_with_nulls<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|labels| {
        labels
            .into_iter()
            .map(|v| Label::from_option(v).as_f64())
            .collect()
    }))
}

impl EvalInput {
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn labels(&self) -> Result<&[f64], CliError> {
        self.y_true.as_deref().ok_or(CliError::MissingLabels)
    }
}

/// Read input JSON from `path`, or from stdin when no path is given.
pub fn read_input(path: &Option<PathBuf>) -> Result<EvalInput, CliError> {
    let text = match path {
        Some(p) => fs::read_to_string(p).map_err(|source| CliError::Io {
            path: p.clone(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    let input = EvalInput::from_json(&text)?;
    log::debug!(
        "loaded {} scores ({} labels)",
        input.y_score.len(),
        input.y_true.as_ref().map_or(0, Vec::len)
    );
    Ok(input)
}
