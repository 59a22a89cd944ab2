//! Regression against reference line-length recordings.
//!
//! Two sources are checked against the same expected events. The first is
//! built in code and always runs. The second is a NaN-padded dataset saved
//! with NumPy: `tests/data/fixtures/reference_transform.npy` (channels x
//! samples) and `tests/data/fixtures/reference_sample_rate.npy` (one
//! element); those tests return early when the files are not present.
//!
//! Both sources hold two bursts on channel 3 that end up at samples
//! `(1344, 1351)` and `(4156, 4180)` after lag compensation.

use linelength::transform::from_nan_padded;
use linelength::{Detection, DetectionConfig, detect_events};
use ndarray::{Array2, ArrayD};
use ndarray_npy::read_npy;
use std::path::Path;

const SR: u32 = 512;
const N_CHANNELS: usize = 8;
const N_SAMPLES: usize = 5121;

fn fixture_path(name: &str) -> Option<std::path::PathBuf> {
    let base = Path::new("tests/data/fixtures");
    let path = base.join(name);
    if path.exists() { Some(path) } else { None }
}

fn load_reference() -> Option<(Array2<Option<f64>>, u32)> {
    let values: Array2<f64> = read_npy(fixture_path("reference_transform.npy")?).ok()?;
    let sr: ArrayD<f64> = read_npy(fixture_path("reference_sample_rate.npy")?).ok()?;
    let sr = sr.iter().next().copied()? as u32;
    Some((from_nan_padded(&values), sr))
}

/// Flat transform with the 20-sample undefined tail of a 512 Hz, 40 ms
/// window and two bursts on channel 3.
///
/// Eight channels keep the 99.9th percentile on the background level while
/// up to 36 samples sit above it.
fn synthetic_reference() -> (Array2<Option<f64>>, u32) {
    let mut t = Array2::from_elem((N_CHANNELS, N_SAMPLES), Some(1.0));
    for ch in 0..N_CHANNELS {
        for i in N_SAMPLES - 20..N_SAMPLES {
            t[(ch, i)] = None;
        }
    }
    for i in (1335..=1341).chain(4147..=4170) {
        t[(3, i)] = Some(500.0);
    }
    (t, SR)
}

fn detect(t: &Array2<Option<f64>>, sr: u32, min_event_ms: u32) -> Detection {
    let config = DetectionConfig::new()
        .with_percentile(99.9)
        .with_min_event_ms(min_event_ms);
    detect_events(t, sr, &config).unwrap()
}

fn check_events(t: &Array2<Option<f64>>, sr: u32) {
    let detection = detect(t, sr, 3);
    assert_eq!(detection.intervals(), vec![(1344, 1351), (4156, 4180)]);
    assert_eq!(detection.channels, vec![vec![3], vec![3]]);
}

fn check_leading_activity(mut t: Array2<Option<f64>>, sr: u32) {
    for i in 0..4 {
        t[(4, i)] = Some(40000.0);
    }
    let detection = detect(&t, sr, 3);
    assert_eq!(
        detection.intervals(),
        vec![(10, 13), (1344, 1351), (4156, 4180)]
    );
    assert_eq!(detection.channels, vec![vec![4], vec![3], vec![3]]);
}

fn check_trailing_activity(mut t: Array2<Option<f64>>, sr: u32) {
    let end = t.ncols();
    for i in end - 4..end {
        t[(1, i)] = Some(40000.0);
    }
    let detection = detect(&t, sr, 3);
    assert_eq!(
        detection.intervals(),
        vec![(1344, 1351), (4156, 4180), (5126, 5130)]
    );
    assert_eq!(detection.channels, vec![vec![3], vec![3], vec![1]]);
}

fn check_merged_channels(mut t: Array2<Option<f64>>, sr: u32) {
    let end = t.ncols();
    for i in end - 4..end {
        t[(1, i)] = Some(40000.0);
    }
    t[(2, end - 3)] = Some(40000.0);
    let detection = detect(&t, sr, 3);
    assert_eq!(
        detection.intervals(),
        vec![(1344, 1351), (4156, 4180), (5126, 5130)]
    );
    assert_eq!(detection.channels, vec![vec![3], vec![3], vec![1, 2]]);
}

fn check_short_events_removed(t: &Array2<Option<f64>>, sr: u32) {
    // 16 ms at 512 Hz rounds to 8 samples; the 7-sample burst goes
    let detection = detect(t, sr, 16);
    assert_eq!(detection.intervals(), vec![(4156, 4180)]);
    assert_eq!(detection.channels, vec![vec![3]]);
}

#[test]
fn synthetic_reference_layout() {
    let (t, sr) = synthetic_reference();
    let config = DetectionConfig::new();
    assert_eq!(config.window_samples(sr), 20);
    assert_eq!(config.lag_samples(sr), 10);
    assert_eq!(config.min_event_samples(sr), 51);
    assert_eq!(t.dim(), (N_CHANNELS, N_SAMPLES));
}

#[test]
fn synthetic_reference_events() {
    let (t, sr) = synthetic_reference();
    check_events(&t, sr);
}

#[test]
fn synthetic_reference_leading_activity() {
    let (t, sr) = synthetic_reference();
    check_leading_activity(t, sr);
}

#[test]
fn synthetic_reference_trailing_activity() {
    let (t, sr) = synthetic_reference();
    check_trailing_activity(t, sr);
}

#[test]
fn synthetic_reference_merged_channels() {
    let (t, sr) = synthetic_reference();
    check_merged_channels(t, sr);
}

#[test]
fn synthetic_reference_short_events_removed() {
    let (t, sr) = synthetic_reference();
    check_short_events_removed(&t, sr);
}

#[test]
fn reference_events() {
    let Some((t, sr)) = load_reference() else {
        return;
    };
    check_events(&t, sr);
}

#[test]
fn reference_leading_activity() {
    let Some((t, sr)) = load_reference() else {
        return;
    };
    check_leading_activity(t, sr);
}

#[test]
fn reference_trailing_activity() {
    let Some((t, sr)) = load_reference() else {
        return;
    };
    check_trailing_activity(t, sr);
}

#[test]
fn reference_merged_channels() {
    let Some((t, sr)) = load_reference() else {
        return;
    };
    check_merged_channels(t, sr);
}

#[test]
fn reference_short_events_removed() {
    let Some((t, sr)) = load_reference() else {
        return;
    };
    check_short_events_removed(&t, sr);
}
