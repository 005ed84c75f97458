//! Small arithmetic helpers shared by the report and fuel statistics.

/// `part` as a percentage of `whole`.
///
/// Returns zero when `whole` is zero or not finite, so callers rendering a
/// dashboard never divide by zero for an empty reporting window.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }

    (part / whole) * 100.0
}

/// The arithmetic mean of `values`, or zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}
