//! Top-proportion evaluation metrics for ranked binary classifiers.
//!
//! Given scores where higher means "more likely positive", these functions
//! find the score that separates the top `p` fraction of the population,
//! turn scores into `0`/`1` predictions at that cutoff, and derive precision,
//! confusion counts and label coverage from the predictions.
//!
//! Labels are passed as `f64` where `NaN` marks a sample with no known ground
//! truth. Every function validates its proportion first, then checks that the
//! label and score vectors line up, and never modifies its inputs.
//!
//! ```
//! use propeval_metrics::{binarize_scores_at_top_proportion, precision_at};
//!
//! let y_score = [0.1, 0.4, 0.35, 0.8];
//! let y_true = [1.0, 1.0, 0.0, 0.0];
//!
//! assert_eq!(binarize_scores_at_top_proportion(&y_score, 0.5).unwrap(), vec![0, 1, 0, 1]);
//! let (precision, cutoff) = precision_at(&y_true, &y_score, 0.5, false).unwrap();
//! assert_eq!((precision, cutoff), (0.5, 0.4));
//! ```

pub mod confusion;
pub mod coverage;
pub mod error;
pub mod label;
pub mod precision;
pub mod proportion;
pub mod threshold;

pub use confusion::{confusion_at, fn_at, fp_at, tn_at, tp_at, ConfusionCounts};
pub use coverage::{labels_at, LabelCount};
pub use error::{MetricsError, Result};
pub use label::{count_labeled, Label};
pub use precision::{precision, precision_at};
pub use proportion::{validate_proportion, Proportion};
pub use threshold::{
    binarize_scores_at_quantile, binarize_scores_at_top_proportion,
    cutoff_score_at_top_proportion, quantile,
};
