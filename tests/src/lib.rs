//! Shared fixtures for the cross-crate scenarios.

/// Four samples whose top half is `[0.8, 0.4]`.
pub const SCORES: [f64; 4] = [0.1, 0.4, 0.35, 0.8];

/// Labels giving exactly one sample per confusion cell against `SCORES` at 0.5.
pub const BALANCED_LABELS: [f64; 4] = [1.0, 1.0, 0.0, 0.0];

/// Alternating labels with the second sample unlabeled.
pub fn labels_with_gap() -> [f64; 4] {
    [1.0, f64::NAN, 1.0, 0.0]
}

#[cfg(test)]
mod reporting;
#[cfg(test)]
mod scenarios;

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
