//! Synthetic Spike Detection Example
//!
//! This example runs the full line-length pipeline on a simulated
//! multichannel recording with a few injected high-frequency bursts.

use linelength::{DetectionConfig, report, synth};
use log::info;

fn main() {
    env_logger::init();
    info!("Synthetic Spike Detection");

    let sr: u32 = 512;
    let n_channels = 8;
    let duration = 20.0;
    let n_samples = (sr as f64 * duration) as usize;

    info!("Generating {n_channels} channels x {n_samples} samples of background noise...");
    let mut recording = synth::noise(n_channels, n_samples, 0.05, 7);

    // (channel, start second, burst seconds)
    let bursts = [(3, 2.5, 0.25), (3, 8.0, 0.15), (5, 8.05, 0.2), (1, 15.0, 0.3)];
    for &(ch, start, len) in &bursts {
        let start = (start * sr as f64) as usize;
        if let Some(row) = recording.row_mut(ch).into_slice() {
            synth::add_burst(row, sr, start, len, 40.0, 4.0);
        }
        info!("  burst on channel {ch} at sample {start} ({len:.2} s)");
    }

    let config = DetectionConfig::new().with_percentile(99.0);
    info!(
        "Window {} samples, minimum event {} samples",
        config.window_samples(sr),
        config.min_event_samples(sr)
    );

    match config.detect(&recording, sr) {
        Ok(detection) => {
            info!("Detected {} events", detection.len());
            for line in report::event_table(&detection, sr).lines() {
                info!("  {line}");
            }
        }
        Err(err) => log::error!("detection failed: {err}"),
    }
}
