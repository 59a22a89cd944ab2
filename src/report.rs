//! Text adapters for detection results.

use crate::events::{Detection, Event};

/// Format a channel set as a comma-terminated list, e.g. `"1,2,"`.
///
/// # Example
/// ```
/// use linelength::report::format_channels;
///
/// assert_eq!(format_channels(&[1, 2]), "1,2,");
/// assert_eq!(format_channels(&[3]), "3,");
/// ```
pub fn format_channels(channels: &[usize]) -> String {
    channels.iter().map(|ch| format!("{ch},")).collect()
}

/// Convert event boundaries from samples to seconds.
pub fn event_times(events: &[Event], sample_rate: u32) -> Vec<(f64, f64)> {
    let sr = sample_rate as f64;
    events
        .iter()
        .map(|e| (e.onset as f64 / sr, e.offset as f64 / sr))
        .collect()
}

/// Render one line per event: index, onset and offset in samples and
/// seconds, and participating channels.
pub fn event_table(detection: &Detection, sample_rate: u32) -> String {
    let sr = sample_rate as f64;
    let rows = detection.iter().enumerate().map(|(i, (event, channels))| {
        format!(
            "{i}\t{}\t{}\t{:.4}\t{:.4}\t{}\n",
            event.onset,
            event.offset,
            event.onset as f64 / sr,
            event.offset as f64 / sr,
            format_channels(channels)
        )
    });
    std::iter::once(String::from("event\tonset\toffset\tonset_s\toffset_s\tchannels\n"))
        .chain(rows)
        .collect()
}
