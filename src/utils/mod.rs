//! Numeric helpers and file output for the patient table

pub mod csv;

/// Round `value` to `decimals` places, ties to even.
///
/// Scales by `10^decimals`, rounds half to even and scales back. Ties are
/// judged on the scaled binary value, so `2.675` rounds to `2.67`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Arithmetic mean, `None` for an empty input
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
