//! Proportion validation shared by every top-proportion operation.

use std::fmt;
use std::str::FromStr;

use crate::error::{MetricsError, Result};

/// A fraction of the population in the closed interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Proportion(f64);

impl Proportion {
    pub const ZERO: Proportion = Proportion(0.0);
    pub const ONE: Proportion = Proportion(1.0);

    pub fn new(value: f64) -> Result<Self> {
        Self::named("proportion", value)
    }

    /// Validate `value`, reporting failures under the given parameter name.
    pub fn named(name: &'static str, value: f64) -> Result<Self> {
        // NaN is never contained in the range
        if !(0.0..=1.0).contains(&value) {
            return Err(MetricsError::InvalidProportion {
                name,
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Zero-based rank of the last sample inside the top proportion of `n`
    /// samples: `max(floor(n * p) - 1, 0)`.
    ///
    /// At `p = 0` this is still `0`, so the best-ranked sample is selected.
    pub fn cutoff_index(self, n: usize) -> usize {
        let selected = (n as f64 * self.0).floor() as usize;
        selected.saturating_sub(1)
    }
}

impl TryFrom<f64> for Proportion {
    type Error = MetricsError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Proportion> for f64 {
    fn from(p: Proportion) -> f64 {
        p.0
    }
}

impl FromStr for Proportion {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| MetricsError::InvalidProportion {
                name: "proportion",
                value: trimmed.to_string(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that `value` is a proportion in `[0, 1]` and hand it back unchanged.
pub fn validate_proportion(value: f64) -> Result<f64> {
    Proportion::new(value).map(Proportion::get)
}
