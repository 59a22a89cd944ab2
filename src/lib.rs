//! Line-length spike detection for multichannel recordings.
//!
//! Linelength finds transient high-energy events ("spikes") in waveform
//! recordings such as EEG. Each channel is converted to a windowed
//! line-length signal, the sum of absolute successive differences over a
//! short sliding window, and the result is segmented with a global
//! percentile threshold.
//!
//! # Quick Start
//!
//! ```rust
//! use linelength::{DetectionConfig, synth, transform};
//! use ndarray::Array2;
//!
//! let sr: u32 = 512;
//! let mut y = Array2::<f64>::zeros((4, 10 * sr as usize));
//! synth::add_burst(y.row_mut(2).as_slice_mut().unwrap(), sr, 3000, 0.2, 60.0, 5.0);
//!
//! // Line-length transform: same shape, undefined tail of one window
//! let ll = transform::line_length(&y, sr, &DetectionConfig::default()).unwrap();
//! assert_eq!(ll.shape(), y.shape());
//! assert!(ll[(0, 5119)].is_none());
//!
//! // Transform + detection with a 99th percentile threshold
//! let config = DetectionConfig::new()
//!     .with_percentile(99.0)
//!     .with_min_event_ms(50);
//! let detection = config.detect(&y, sr).unwrap();
//! assert_eq!(detection.len(), 1);
//! assert_eq!(detection.channels[0], vec![2]);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`transform`] | Line-length transform of 1-D and 2-D waveforms |
//! | [`events`] | Threshold, consolidation, boundary correction, channel attribution |
//! | [`pipeline`] | Transform followed by detection |
//! | [`config`] | Window, percentile, minimum event length and orientation |
//! | [`report`] | Text formatting of detection results |
//! | [`synth`] | Synthetic recordings |
//! | [`utils`] | Percentile, rounding and validation helpers |
//!
//! # Layout
//!
//! 2-D input is channels x samples unless
//! [`Orientation::TimeByChannels`] is configured; the layout is never
//! inferred from the shape. Outputs keep the caller's layout.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]. Input with more than two
//! axes fails with [`Error::Dimensionality`] and inconsistent event
//! boundaries with [`Error::BoundaryMismatch`].
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` (default) | Compute channels and channel attribution with rayon |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod events;
pub mod layout;
pub mod pipeline;
pub mod report;
pub mod synth;
pub mod transform;
pub mod utils;

pub use config::{DetectionConfig, Orientation};
pub use events::{Detection, Event, detect_events};
pub use pipeline::detect_spikes;
pub use transform::line_length;
