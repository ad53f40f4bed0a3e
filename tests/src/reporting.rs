use approx::assert_abs_diff_eq;
use propeval_metrics::{confusion_at, precision_at};
use propeval_report::{
    default_proportions, evaluate_at_proportions, precision_at_proportions, EvaluationOptions,
};

use crate::{labels_with_gap, BALANCED_LABELS, SCORES};

#[test]
fn series_matches_single_point_calls() {
    let proportions = [0.25, 0.5, 0.75, 1.0];
    let points = precision_at_proportions(&BALANCED_LABELS, &SCORES, &proportions, false).unwrap();
    for point in points {
        let (precision, cutoff) =
            precision_at(&BALANCED_LABELS, &SCORES, point.proportion, false).unwrap();
        assert_abs_diff_eq!(point.precision, precision);
        assert_abs_diff_eq!(point.cutoff, cutoff);
    }
}

#[test]
fn report_rows_agree_with_confusion_counts() {
    let y_true = labels_with_gap();
    let options = EvaluationOptions {
        ignore_nas: true,
        normalize: false,
    };
    let report = evaluate_at_proportions(&y_true, &SCORES, &default_proportions(), options).unwrap();
    assert_eq!(report.rows.len(), 100);
    for row in &report.rows {
        let counts = confusion_at(&y_true, &SCORES, row.proportion).unwrap();
        assert_eq!(row.confusion, counts);
        assert_eq!(counts.total(), report.n_labeled);
        // zeroed samples touch neither tp nor fp
        assert_abs_diff_eq!(row.precision, counts.precision().unwrap_or(0.0));
    }
}
