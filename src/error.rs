/// Crate-level error type for line-length spike detection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input has a number of axes other than one or two.
    #[error("only 1-D or 2-D input is supported, got {ndim} axes")]
    Dimensionality { ndim: usize },

    /// Onset and offset counts still disagree after boundary correction.
    #[error("onset/offset count mismatch after boundary correction: {onsets} onsets, {offsets} offsets")]
    BoundaryMismatch { onsets: usize, offsets: usize },

    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Waveform contains NaN or infinite samples.
    #[error("input waveform contains non-finite values")]
    NonFiniteInput,
}

/// Convenience Result type for linelength operations.
pub type Result<T> = std::result::Result<T, Error>;
