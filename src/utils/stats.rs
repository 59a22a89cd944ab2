/// Compute the `q`-th percentile of `values` using linear interpolation
/// between the two closest ranks.
///
/// The rank of the percentile is `q / 100 * (n - 1)`; when it falls between
/// two order statistics the result is interpolated between them. This is the
/// default method of NumPy's `percentile`.
///
/// Returns `None` for empty input. `q` is clamped to `[0, 100]`.
///
/// # Example
/// ```
/// use linelength::utils::percentile;
///
/// let v = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&v, 50.0), Some(2.5));
/// assert_eq!(percentile(&v, 100.0), Some(4.0));
/// ```
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let rank = q.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let t = rank - lo as f64;

    let mut buf = values.to_vec();
    let (_, &mut low, upper) = buf.select_nth_unstable_by(lo, f64::total_cmp);
    if t == 0.0 || upper.is_empty() {
        return Some(low);
    }
    let high = upper.iter().copied().fold(f64::INFINITY, f64::min);

    Some(lerp(low, high, t))
}

// Evaluated from the nearer end to keep the result inside [a, b].
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Round `x` to the nearest integer sample count, ties to even.
///
/// Negative and non-finite inputs map to zero.
///
/// # Example
/// ```
/// use linelength::utils::round_samples;
///
/// assert_eq!(round_samples(20.48), 20);
/// assert_eq!(round_samples(10.5), 10);
/// assert_eq!(round_samples(11.5), 12);
/// ```
pub fn round_samples(x: f64) -> usize {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    x.round_ties_even() as usize
}
