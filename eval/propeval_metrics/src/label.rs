/// Typed view of a single ground-truth entry.
///
/// Labels travel as `f64` so that a missing value can be represented by NaN,
/// the same encoding numeric pipelines already use. `Label` is the decoded
/// form; `Other` keeps values outside `{0, 1}` so callers can report them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Label {
    Negative,
    Positive,
    Missing,
    Other(f64),
}

impl Label {
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Label::Missing
        } else if value == 1.0 {
            Label::Positive
        } else if value == 0.0 {
            Label::Negative
        } else {
            Label::Other(value)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Label::Negative => 0.0,
            Label::Positive => 1.0,
            Label::Missing => f64::NAN,
            Label::Other(v) => v,
        }
    }

    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Label::Missing, Label::from_f64)
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Label::Missing)
    }
}

impl From<bool> for Label {
    fn from(b: bool) -> Self {
        if b {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Number of entries in `y_true` that carry a label (not NaN).
pub fn count_labeled(y_true: &[f64]) -> usize {
    y_true.iter().filter(|v| !v.is_nan()).count()
}
