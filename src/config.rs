//! Detection parameters shared by the transform and the event detector.

use crate::utils::{round_samples, valid_percentile, valid_sample_rate, valid_window};

/// Default line-length window duration in seconds (40 ms).
pub const DEFAULT_WINDOW_SECS: f64 = 0.04;

/// Default detection percentile.
pub const DEFAULT_PERCENTILE: f64 = 99.9;

/// Default minimum event length in milliseconds.
pub const DEFAULT_MIN_EVENT_MS: u32 = 100;

/// Layout of a 2-D waveform.
///
/// Orientation is always stated by the caller; it is never guessed from the
/// array shape. One-dimensional input is a single channel regardless of the
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Rows are channels, columns are samples.
    #[default]
    ChannelsByTime,
    /// Rows are samples, columns are channels.
    TimeByChannels,
}

/// Configuration for line-length spike detection.
///
/// The same value drives both the transform and the detector, so the window
/// used to compute line length is the window used to compensate lag.
///
/// # Example
/// ```
/// use linelength::DetectionConfig;
///
/// let config = DetectionConfig::new()
///     .with_percentile(99.5)
///     .with_min_event_ms(20);
/// assert_eq!(config.window_samples(512), 20);
/// assert_eq!(config.min_event_samples(512), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// Line-length window duration in seconds
    pub window_secs: f64,
    /// Percentile (0-100) of all line-length values used as threshold
    pub percentile: f64,
    /// Events strictly shorter than this many milliseconds are discarded
    pub min_event_ms: u32,
    /// Layout of 2-D input
    pub orientation: Orientation,
}

impl DetectionConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line-length window duration in seconds.
    pub fn with_window_secs(mut self, window_secs: f64) -> Self {
        self.window_secs = window_secs;
        self
    }

    /// Set the detection percentile.
    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Set the minimum event length in milliseconds.
    pub fn with_min_event_ms(mut self, min_event_ms: u32) -> Self {
        self.min_event_ms = min_event_ms;
        self
    }

    /// Set the layout of 2-D input.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Window length in samples: `round(window_secs * sample_rate)`.
    pub fn window_samples(&self, sample_rate: u32) -> usize {
        round_samples(self.window_secs * sample_rate as f64)
    }

    /// Minimum event length in samples: `round(sample_rate * min_event_ms / 1000)`.
    pub fn min_event_samples(&self, sample_rate: u32) -> usize {
        round_samples(sample_rate as f64 * self.min_event_ms as f64 / 1000.0)
    }

    /// Shift applied to event boundaries to re-center them on the window:
    /// `round(window_samples / 2)`.
    pub fn lag_samples(&self, sample_rate: u32) -> usize {
        round_samples(self.window_samples(sample_rate) as f64 / 2.0)
    }

    /// Check every parameter against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> crate::Result<()> {
        valid_sample_rate(sample_rate)?;
        valid_window(self.window_secs)?;
        valid_percentile(self.percentile)
    }

    /// Run the transform and the detector on raw `samples` with this configuration.
    ///
    /// # Example
    /// ```
    /// use linelength::DetectionConfig;
    /// use ndarray::Array2;
    ///
    /// let samples = Array2::<f64>::zeros((2, 1024));
    /// let detection = DetectionConfig::new().detect(&samples, 512).unwrap();
    /// assert!(detection.is_empty());
    /// ```
    pub fn detect<S, D>(
        &self,
        samples: &ndarray::ArrayBase<S, D>,
        sample_rate: u32,
    ) -> crate::Result<crate::events::Detection>
    where
        S: ndarray::Data<Elem = f64>,
        D: ndarray::Dimension,
    {
        crate::pipeline::run(samples, sample_rate, self)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            percentile: DEFAULT_PERCENTILE,
            min_event_ms: DEFAULT_MIN_EVENT_MS,
            orientation: Orientation::ChannelsByTime,
        }
    }
}
