mod stats;
mod validation;

// Statistics: percentile, sample-count rounding
pub use stats::{percentile, round_samples};

// Validation operations
pub use validation::{valid_percentile, valid_sample_rate, valid_waveform, valid_window};

#[cfg(test)]
mod tests;
