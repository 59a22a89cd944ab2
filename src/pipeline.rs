//! Transform-then-detect orchestration.

use crate::config::DetectionConfig;
use crate::events::{Detection, detect_events};
use crate::transform::line_length;
use ndarray::{ArrayBase, Data, Dimension};

/// Run the line-length transform and event detection with `config`.
///
/// The transform and the detector read the same `config`, so the window used
/// for lag compensation is always the window the transform used.
pub fn run<S, D>(
    samples: &ArrayBase<S, D>,
    sample_rate: u32,
    config: &DetectionConfig,
) -> crate::Result<Detection>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let transformed = line_length(samples, sample_rate, config)?;
    detect_events(&transformed, sample_rate, config)
}

/// Detect spikes in raw `samples` (rows are channels) with the default
/// 40 ms window, 99.9th percentile threshold and 100 ms minimum event length.
///
/// # Example
/// ```
/// use linelength::detect_spikes;
/// use ndarray::Array1;
///
/// let y = Array1::<f64>::zeros(2048);
/// let detection = detect_spikes(&y, 512).unwrap();
/// assert!(detection.is_empty());
/// ```
pub fn detect_spikes<S, D>(samples: &ArrayBase<S, D>, sample_rate: u32) -> crate::Result<Detection>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    run(samples, sample_rate, &DetectionConfig::default())
}
