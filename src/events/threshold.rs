use crate::utils::percentile;
use ndarray::{Array2, ArrayView2};

/// Value of a transformed sample for thresholding purposes.
///
/// Undefined (`None`) and NaN entries count as zero.
#[inline]
pub fn defined_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Global detection threshold: the `q`-th percentile of every entry of
/// `transformed`, flattened across channels and samples.
///
/// Returns `None` when `transformed` has no entries.
pub fn threshold(transformed: &ArrayView2<Option<f64>>, q: f64) -> Option<f64> {
    let values: Vec<f64> = transformed.iter().map(|&v| defined_or_zero(v)).collect();
    percentile(&values, q)
}

/// Per-channel, per-sample indicator of `transformed > threshold`.
pub fn indicator(transformed: &ArrayView2<Option<f64>>, threshold: f64) -> Array2<bool> {
    transformed.map(|&v| defined_or_zero(v) > threshold)
}

/// Collapse a (channels x samples) indicator into one timeline that is active
/// wherever at least one channel is.
pub fn consolidate(indicator: &ArrayView2<bool>) -> Vec<bool> {
    indicator
        .columns()
        .into_iter()
        .map(|col| col.iter().any(|&active| active))
        .collect()
}
