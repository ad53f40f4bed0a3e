use std::path::PathBuf;

use propeval_metrics::MetricsError;
use propeval_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize output: {0}")]
    Output(#[source] serde_json::Error),
    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: MetricsError,
    },
    #[error("input has no y_true labels; this command needs them")]
    MissingLabels,
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CliError {
    /// `1` for problems found while computing or writing results, `2` for
    /// unreadable input or config.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Metrics(_) | CliError::Report(_) | CliError::Output(_) => 1,
            _ => 2,
        }
    }
}
