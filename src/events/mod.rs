//! Percentile-threshold event detection on line-length signals.
//!
//! The detector runs as a fixed sequence of whole-array stages:
//! threshold, indicator, consolidation across channels, edge extraction with
//! boundary correction, channel attribution, duration filtering and lag
//! compensation. Each stage is exposed for inspection.

pub mod detect;
pub mod segment;
pub mod threshold;

pub use detect::{
    Detection, Event, channel_membership, compensate_lag, detect_events, remove_short_events,
};
pub use segment::{Boundaries, correct_boundaries, edges};
pub use threshold::{consolidate, defined_or_zero, indicator, threshold};
