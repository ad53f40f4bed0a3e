use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;
use propeval_metrics::{
    binarize_scores_at_quantile, binarize_scores_at_top_proportion, confusion_at,
    cutoff_score_at_top_proportion, fn_at, fp_at, labels_at, precision_at, tn_at, tp_at,
    ConfusionCounts, LabelCount, MetricsError,
};

use crate::{init_test_logger, labels_with_gap, BALANCED_LABELS, SCORES};

#[test]
fn ranked_cutoff_and_binarization() {
    init_test_logger();
    assert_eq!(cutoff_score_at_top_proportion(&SCORES, 0.5), Ok(0.4));
    assert_eq!(
        binarize_scores_at_top_proportion(&SCORES, 0.5).unwrap(),
        vec![0, 1, 0, 1]
    );
}

#[test]
fn one_sample_per_cell_and_half_precision() {
    assert_eq!(tp_at(&BALANCED_LABELS, &SCORES, 0.5), Ok(1));
    assert_eq!(fp_at(&BALANCED_LABELS, &SCORES, 0.5), Ok(1));
    assert_eq!(tn_at(&BALANCED_LABELS, &SCORES, 0.5), Ok(1));
    assert_eq!(fn_at(&BALANCED_LABELS, &SCORES, 0.5), Ok(1));

    let (precision, cutoff) = precision_at(&BALANCED_LABELS, &SCORES, 0.5, false).unwrap();
    assert_abs_diff_eq!(precision, 0.5);
    assert_abs_diff_eq!(cutoff, 0.4);
}

#[test]
fn missing_label_is_zeroed_only_when_ignored() {
    init_test_logger();
    let y_true = labels_with_gap();
    assert_eq!(precision_at(&y_true, &SCORES, 0.5, true), Ok((0.0, 0.4)));
    assert_eq!(
        precision_at(&y_true, &SCORES, 0.5, false),
        Err(MetricsError::MissingLabel { index: 1 })
    );
    // counts skip the unlabeled sample instead of failing
    assert_eq!(
        confusion_at(&y_true, &SCORES, 0.5).unwrap(),
        ConfusionCounts {
            tp: 0,
            fp: 1,
            tn: 0,
            fn_: 2
        }
    );
}

#[test]
fn every_operation_rejects_bad_proportions() {
    for p in [1.5, -0.1] {
        let expect_invalid = |r: Result<(), MetricsError>| {
            assert!(
                matches!(r, Err(MetricsError::InvalidProportion { .. })),
                "proportion {p} should be rejected"
            )
        };
        expect_invalid(cutoff_score_at_top_proportion(&SCORES, p).map(drop));
        expect_invalid(binarize_scores_at_top_proportion(&SCORES, p).map(drop));
        expect_invalid(binarize_scores_at_quantile(&SCORES, p).map(drop));
        expect_invalid(precision_at(&BALANCED_LABELS, &SCORES, p, true).map(drop));
        expect_invalid(tp_at(&BALANCED_LABELS, &SCORES, p).map(drop));
        expect_invalid(fp_at(&BALANCED_LABELS, &SCORES, p).map(drop));
        expect_invalid(tn_at(&BALANCED_LABELS, &SCORES, p).map(drop));
        expect_invalid(fn_at(&BALANCED_LABELS, &SCORES, p).map(drop));
        expect_invalid(labels_at(&BALANCED_LABELS, &SCORES, p, false).map(drop));
    }
}

#[test]
fn proportion_is_checked_before_shape() {
    // both problems present; the proportion wins
    assert!(matches!(
        tp_at(&[1.0], &[], 3.0),
        Err(MetricsError::InvalidProportion { .. })
    ));
}

#[test]
fn mismatched_and_empty_vectors_fail_explicitly() {
    assert_eq!(
        precision_at(&[1.0, 0.0, 1.0], &SCORES, 0.5, false),
        Err(MetricsError::LengthMismatch {
            labels: 3,
            scores: 4
        })
    );
    assert_eq!(
        cutoff_score_at_top_proportion(&[], 0.5),
        Err(MetricsError::EmptyInput)
    );
    assert_eq!(
        labels_at(&[], &[], 1.0, true),
        Err(MetricsError::EmptyInput)
    );
}

#[test]
fn ties_push_realized_proportion_past_nominal() {
    let scores = [0.9, 0.6, 0.6, 0.6, 0.2, 0.1];
    let binary = binarize_scores_at_top_proportion(&scores, 0.34).unwrap();
    // floor(6 * 0.34) - 1 = 1 -> cutoff 0.6, four of six selected
    assert_eq!(binary, vec![1, 1, 1, 1, 0, 0]);
}

#[test]
fn quantile_and_rank_rules_disagree_on_the_boundary() {
    let scores = [1.0, 2.0, 3.0, 4.0, 5.0];
    // rank rule at 0.4: cutoff 4.0, inclusive
    assert_eq!(
        binarize_scores_at_top_proportion(&scores, 0.4).unwrap(),
        vec![0, 0, 0, 1, 1]
    );
    // the 0.75 quantile is exactly 4.0, exclusive
    assert_eq!(
        binarize_scores_at_quantile(&scores, 0.75).unwrap(),
        vec![0, 0, 0, 0, 1]
    );
}

#[test]
fn label_coverage_in_top_half() {
    let y_true = labels_with_gap();
    // top two by score are indices 3 and 1; index 1 is unlabeled
    assert_eq!(
        labels_at(&y_true, &SCORES, 0.5, false),
        Ok(LabelCount::Count(1))
    );
    assert_eq!(
        labels_at(&y_true, &SCORES, 0.5, true),
        Ok(LabelCount::Fraction(1.0 / 3.0))
    );
}
