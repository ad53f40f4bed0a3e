use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use propeval_metrics::validate_proportion;

use crate::error::CliError;

/// Settings for `propeval report`, loaded from a TOML file.
///
/// ```toml
/// proportions = [0.01, 0.05, 0.1, 0.25]
/// ignore_nas = true
/// normalize = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proportions: Vec<f64>,
    #[serde(default)]
    pub ignore_nas: bool,
    #[serde(default)]
    pub normalize: bool,
}

impl EvalConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EvalConfig = toml::from_str(&text).map_err(|source| CliError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        for &p in &config.proportions {
            validate_proportion(p).map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        }
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
