use crate::config::DetectionConfig;
use crate::events::segment::{correct_boundaries, edges};
use crate::events::threshold::{consolidate, indicator, threshold};
use crate::layout::canonical_view;
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Dimension, Slice};

/// A detected event in sample indices.
///
/// `onset` is the last sample before the activity starts (or `0` when the
/// recording opens active) and `offset` is the last active sample, so the
/// event spans `offset - onset` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Event {
    /// Sample preceding the run of activity
    pub onset: usize,
    /// Last active sample
    pub offset: usize,
}

impl Event {
    /// Create an event from its boundaries.
    pub fn new(onset: usize, offset: usize) -> Self {
        Self { onset, offset }
    }

    /// Event length, `offset - onset`.
    pub fn duration(&self) -> usize {
        self.offset.saturating_sub(self.onset)
    }
}

impl From<(usize, usize)> for Event {
    fn from((onset, offset): (usize, usize)) -> Self {
        Self::new(onset, offset)
    }
}

/// Result of event detection.
///
/// `events` are sorted by onset and never overlap. `channels[i]` lists, in
/// ascending order, the channels that crossed the threshold during
/// `events[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub events: Vec<Event>,
    pub channels: Vec<Vec<usize>>,
}

impl Detection {
    /// Number of detected events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events together with their channel sets.
    pub fn iter(&self) -> impl Iterator<Item = (&Event, &[usize])> {
        self.events
            .iter()
            .zip(self.channels.iter().map(Vec::as_slice))
    }

    /// Event boundaries as `(onset, offset)` pairs.
    pub fn intervals(&self) -> Vec<(usize, usize)> {
        self.events.iter().map(|e| (e.onset, e.offset)).collect()
    }
}

/// Channels whose indicator is set anywhere inside each event.
///
/// The search covers `onset..=offset`, clipped to the recording, so the
/// last active sample of the run is included. The onset sample of an
/// interior event is inactive on every channel and never adds a member.
///
/// # Arguments
/// * `indicator` - (channels x samples) threshold indicator
/// * `events` - Events in sample indices of `indicator`
///
/// # Returns
/// One ascending channel list per event
pub fn channel_membership(indicator: &ArrayView2<bool>, events: &[Event]) -> Vec<Vec<usize>> {
    let n_samples = indicator.ncols();
    let members = |event: &Event| -> Vec<usize> {
        let end = (event.offset + 1).min(n_samples);
        let start = event.onset.min(end);
        indicator
            .slice_axis(Axis(1), Slice::from(start..end))
            .rows()
            .into_iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|&active| active))
            .map(|(ch, _)| ch)
            .collect()
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        events.par_iter().map(members).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        events.iter().map(members).collect()
    }
}

/// Drop events strictly shorter than `min_samples`.
///
/// Events of exactly `min_samples` samples are kept. Channel sets are removed
/// together with their events.
pub fn remove_short_events(detection: &mut Detection, min_samples: usize) {
    let before = detection.len();
    let (events, channels): (Vec<Event>, Vec<Vec<usize>>) = detection
        .events
        .drain(..)
        .zip(detection.channels.drain(..))
        .filter(|(event, _)| event.duration() >= min_samples)
        .unzip();
    detection.events = events;
    detection.channels = channels;
    log::debug!(
        "removed {} events shorter than {min_samples} samples",
        before - detection.len()
    );
}

/// Shift every event by `lag` samples to center it on the line-length window.
pub fn compensate_lag(detection: &mut Detection, lag: usize) {
    for event in detection.events.iter_mut() {
        event.onset += lag;
        event.offset += lag;
    }
}

/// Detect events in a line-length transformed signal.
///
/// Entries that are `None` (the undefined tail of the transform) count as
/// zero both for the percentile threshold and for the comparison against it.
/// Events shorter than `config.min_event_ms` are discarded and the survivors
/// are shifted by half the line-length window.
///
/// # Arguments
/// * `transformed` - 1-D or 2-D transformed signal, laid out per `config.orientation`
/// * `sample_rate` - Sampling rate in Hz
/// * `config` - Window, percentile and minimum event length
///
/// # Errors
/// * [`crate::Error::Dimensionality`] if `transformed` has more than two axes
/// * [`crate::Error::InvalidParameter`] for an invalid sampling rate, window or percentile
/// * [`crate::Error::BoundaryMismatch`] if onsets and offsets cannot be paired
///
/// # Example
/// ```
/// use linelength::{DetectionConfig, events::detect_events};
/// use ndarray::Array2;
///
/// let mut transformed = Array2::from_elem((2, 200), Some(1.0));
/// for t in 50..60 {
///     transformed[(1, t)] = Some(100.0);
/// }
/// let config = DetectionConfig::new().with_percentile(90.0).with_min_event_ms(10);
/// let detection = detect_events(&transformed, 1000, &config).unwrap();
/// assert_eq!(detection.intervals(), vec![(69, 79)]);
/// assert_eq!(detection.channels, vec![vec![1]]);
/// ```
pub fn detect_events<S, D>(
    transformed: &ArrayBase<S, D>,
    sample_rate: u32,
    config: &DetectionConfig,
) -> crate::Result<Detection>
where
    S: Data<Elem = Option<f64>>,
    D: Dimension,
{
    let transformed = canonical_view(transformed, config.orientation)?;
    config.validate(sample_rate)?;

    let Some(thresh) = threshold(&transformed, config.percentile) else {
        return Ok(Detection::default());
    };
    log::debug!("threshold at {}th percentile: {thresh}", config.percentile);

    let active = indicator(&transformed, thresh);
    let mask = consolidate(&active.view());
    let intervals = correct_boundaries(edges(&mask), &mask)?;
    log::debug!("{} candidate events", intervals.len());

    let events: Vec<Event> = intervals.into_iter().map(Event::from).collect();
    let channels = channel_membership(&active.view(), &events);
    let mut detection = Detection { events, channels };

    remove_short_events(&mut detection, config.min_event_samples(sample_rate));
    compensate_lag(&mut detection, config.lag_samples(sample_rate));
    log::debug!("{} events detected", detection.len());

    Ok(detection)
}
