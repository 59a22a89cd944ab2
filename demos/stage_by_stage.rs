//! Stage-by-Stage Detection Example
//!
//! This example walks through each detector stage on a short single-channel
//! signal: transform, threshold, indicator, edges, boundary correction,
//! channel attribution, duration filtering and lag compensation.

use linelength::events::{self, Detection, Event};
use linelength::{DetectionConfig, synth, transform};
use log::info;
use ndarray::Array2;

fn main() {
    env_logger::init();
    info!("Stage-by-Stage Detection");

    let sr: u32 = 256;
    let mut y = vec![0.0f64; 4 * sr as usize];
    // One burst touching the start of the recording, one in the middle
    synth::add_burst(&mut y, sr, 0, 0.1, 50.0, 3.0);
    synth::add_burst(&mut y, sr, 500, 0.2, 50.0, 3.0);

    let config = DetectionConfig::new()
        .with_percentile(95.0)
        .with_min_event_ms(30);
    let window = config.window_samples(sr);
    info!("Window length: {window} samples");

    let ll = transform::line_length_1d(&y, window);
    let undefined = ll.iter().filter(|v| v.is_none()).count();
    info!("Transform: {} values, {undefined} undefined", ll.len());

    let ll = match Array2::from_shape_vec((1, ll.len()), ll) {
        Ok(a) => a,
        Err(err) => {
            log::error!("reshape failed: {err}");
            return;
        }
    };

    let Some(thresh) = events::threshold(&ll.view(), config.percentile) else {
        info!("Empty signal, nothing to detect");
        return;
    };
    info!("Threshold ({}th percentile): {thresh:.4}", config.percentile);

    let active = events::indicator(&ll.view(), thresh);
    let mask = events::consolidate(&active.view());
    let edges = events::edges(&mask);
    info!("Raw onsets: {:?}", edges.onsets);
    info!("Raw offsets: {:?}", edges.offsets);

    let intervals = match events::correct_boundaries(edges, &mask) {
        Ok(intervals) => intervals,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    info!("Corrected intervals: {intervals:?}");

    let events_list: Vec<Event> = intervals.into_iter().map(Event::from).collect();
    let channels = events::channel_membership(&active.view(), &events_list);
    let mut detection = Detection {
        events: events_list,
        channels,
    };

    events::remove_short_events(&mut detection, config.min_event_samples(sr));
    info!("After duration filter: {:?}", detection.intervals());

    events::compensate_lag(&mut detection, config.lag_samples(sr));
    info!("After lag compensation: {:?}", detection.intervals());
}
