//! Summary statistics for the chronos time-series crates.
//!
//! Every helper returns `None` where the statistic is undefined instead of
//! inventing a fallback value, so callers decide how to report it.

/// Sum of a slice with Neumaier compensation.
///
/// Keeps the result independent of how large and small magnitudes are
/// interleaved in long series. A sum that overflows is returned as the
/// plain IEEE result (`±inf`) rather than the `NaN` the compensation term
/// would produce.
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &x in data {
        let t = total + x;
        if !t.is_finite() {
            return data.iter().sum();
        }
        if total.abs() >= x.abs() {
            compensation += (total - t) + x;
        } else {
            compensation += (x - t) + total;
        }
        total = t;
    }
    total + compensation
}

/// Arithmetic mean of a slice. Returns `None` if empty.
///
/// Finite input always gives a finite mean, even when the plain sum would
/// overflow `f64`.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let n = data.len() as f64;
    let total = sum(data);
    if total.is_finite() || !data.iter().all(|x| x.is_finite()) {
        return Some(total / n);
    }
    // Scale first so the running total stays within range.
    let scaled: Vec<f64> = data.iter().map(|&x| x / n).collect();
    Some(sum(&scaled))
}

/// Sample variance with N-1 denominator.
/// Returns `None` if fewer than 2 elements.
pub fn variance(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let m = mean(data)?;
    let squares: Vec<f64> = data.iter().map(|&x| (x - m) * (x - m)).collect();
    Some(sum(&squares) / (n - 1) as f64)
}

/// Sample standard deviation with N-1 denominator.
/// Returns `None` if fewer than 2 elements.
pub fn sd(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}
