//! Windowed line-length transform.
//!
//! For every sample `i` the line length is the sum of absolute successive
//! differences inside the window `y[i .. i + window_samples]`. The last
//! `window_samples` positions of each channel have no complete window and are
//! left undefined (`None`).

use crate::config::DetectionConfig;
use crate::layout::{canonical_view, restore};
use crate::utils::valid_waveform;
use ndarray::{Array, Array2, ArrayBase, ArrayView1, Data, Dimension};
use std::borrow::Cow;

/// Compute the line-length transform of a single channel.
///
/// # Arguments
/// * `y` - Input samples
/// * `window_samples` - Window length in samples
///
/// # Returns
/// Vector of the same length as `y`; the trailing `window_samples` entries
/// are `None`.
///
/// # Example
/// ```
/// use linelength::transform::line_length_1d;
///
/// let y = [0.0, 1.0, 0.0, 2.0, 0.0];
/// let ll = line_length_1d(&y, 3);
/// assert_eq!(ll, vec![Some(2.0), Some(3.0), None, None, None]);
/// ```
pub fn line_length_1d(y: &[f64], window_samples: usize) -> Vec<Option<f64>> {
    let valid = y.len().saturating_sub(window_samples);
    let mut out = vec![None; y.len()];
    for (i, slot) in out.iter_mut().enumerate().take(valid) {
        *slot = Some(window_line_length(&y[i..i + window_samples]));
    }
    out
}

fn window_line_length(window: &[f64]) -> f64 {
    window.windows(2).map(|pair| (pair[1] - pair[0]).abs()).sum()
}

fn channel_line_length(row: ArrayView1<f64>, window_samples: usize) -> Vec<Option<f64>> {
    let samples = match row.as_slice() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(row.to_vec()),
    };
    line_length_1d(&samples, window_samples)
}

/// Compute the line-length transform of a 1-D or 2-D waveform.
///
/// The output has the same shape and layout as `samples`. 2-D input is read
/// according to `config.orientation`; the window length is
/// `config.window_samples(sample_rate)`. Channels are computed in parallel
/// when the `parallel` feature is enabled.
///
/// # Errors
/// * [`crate::Error::Dimensionality`] if `samples` has more than two axes
/// * [`crate::Error::InvalidParameter`] for a zero sampling rate or bad window
/// * [`crate::Error::NonFiniteInput`] if any sample is NaN or infinite
///
/// # Example
/// ```
/// use linelength::{DetectionConfig, transform::line_length};
/// use ndarray::Array2;
///
/// let y = Array2::<f64>::zeros((3, 100));
/// let ll = line_length(&y, 512, &DetectionConfig::default()).unwrap();
/// assert_eq!(ll.shape(), &[3, 100]);
/// assert_eq!(ll[(0, 0)], Some(0.0));
/// assert_eq!(ll[(0, 99)], None);
/// ```
pub fn line_length<S, D>(
    samples: &ArrayBase<S, D>,
    sample_rate: u32,
    config: &DetectionConfig,
) -> crate::Result<Array<Option<f64>, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let canonical = canonical_view(samples, config.orientation)?;
    config.validate(sample_rate)?;
    valid_waveform(&canonical)?;

    let window_samples = config.window_samples(sample_rate);
    let (n_channels, n_samples) = canonical.dim();
    log::debug!(
        "line-length transform: {n_channels} channels x {n_samples} samples, window {window_samples} samples"
    );

    let rows: Vec<Vec<Option<f64>>> = {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n_channels)
                .into_par_iter()
                .map(|ch| channel_line_length(canonical.row(ch), window_samples))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..n_channels)
                .map(|ch| channel_line_length(canonical.row(ch), window_samples))
                .collect()
        }
    };

    let mut out = Array2::<Option<f64>>::from_elem((n_channels, n_samples), None);
    for (mut dst, src) in out.rows_mut().into_iter().zip(rows) {
        dst.assign(&ArrayView1::from(&src));
    }

    restore(out, samples.ndim(), config.orientation)
}

/// Convert a NaN-padded array (the usual on-disk form of a transformed
/// signal) into the `Option` representation.
pub fn from_nan_padded<S, D>(values: &ArrayBase<S, D>) -> Array<Option<f64>, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.map(|&v| if v.is_nan() { None } else { Some(v) })
}

/// Convert a transformed signal into a NaN-padded float array.
pub fn to_nan_padded<S, D>(values: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = Option<f64>>,
    D: Dimension,
{
    values.map(|v| v.unwrap_or(f64::NAN))
}
