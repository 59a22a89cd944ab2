use ndarray::ArrayView2;

/// Validate a canonical (channels x samples) waveform.
///
/// All samples must be finite (no NaN or Inf). An empty waveform is valid
/// and simply produces no line-length values.
///
/// # Example
/// ```
/// use linelength::utils::valid_waveform;
/// use ndarray::Array2;
///
/// let y = Array2::from_shape_vec((2, 3), vec![0.0, 0.5, -0.5, 0.1, 0.2, -0.1]).unwrap();
/// assert!(valid_waveform(&y.view()).is_ok());
///
/// let bad = Array2::from_elem((1, 3), f64::NAN);
/// assert!(valid_waveform(&bad.view()).is_err());
/// ```
pub fn valid_waveform(y: &ArrayView2<f64>) -> crate::Result<()> {
    if !y.iter().all(|v| v.is_finite()) {
        return Err(crate::Error::NonFiniteInput);
    }

    Ok(())
}

/// Ensure the sampling rate is a positive number of samples per second.
pub fn valid_sample_rate(sample_rate: u32) -> crate::Result<()> {
    if sample_rate == 0 {
        return Err(crate::Error::InvalidParameter {
            name: "sample_rate",
            value: sample_rate.to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    Ok(())
}

/// Ensure a detection percentile lies in `[0, 100]`.
pub fn valid_percentile(percentile: f64) -> crate::Result<()> {
    if !(0.0..=100.0).contains(&percentile) {
        return Err(crate::Error::InvalidParameter {
            name: "percentile",
            value: percentile.to_string(),
            reason: "must be within [0, 100]".to_string(),
        });
    }
    Ok(())
}

/// Ensure the line-length window is a positive, finite duration in seconds.
pub fn valid_window(window_secs: f64) -> crate::Result<()> {
    if !window_secs.is_finite() || window_secs <= 0.0 {
        return Err(crate::Error::InvalidParameter {
            name: "window_secs",
            value: window_secs.to_string(),
            reason: "must be finite and > 0".to_string(),
        });
    }
    Ok(())
}
