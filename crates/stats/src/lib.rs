//! Statistical helper functions for the Boreas hazard-query engine.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Percentile with linear interpolation between order statistics
/// (numpy's default, R's type=7).
///
/// `p` is a fraction in `[0, 1]`, not a percent.
///
/// **Expects pre-sorted input** (caller's responsibility). Callers must also
/// filter out NaN beforehand; a NaN anywhere in the input poisons the result.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile: input must not be empty");
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Retains only finite values, in input order.
pub fn filter_finite(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| v.is_finite()).collect()
}
