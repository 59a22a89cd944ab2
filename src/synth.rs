//! Synthetic recordings for demos and tests.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a pure tone.
pub fn tone(frequency: f64, sr: u32, duration: f64) -> Vec<f64> {
    let n_samples = (duration * sr as f64) as usize;
    let angular_freq = 2.0 * std::f64::consts::PI * frequency / sr as f64;
    (0..n_samples)
        .map(|i| (angular_freq * i as f64).sin())
        .collect()
}

/// Uniform background noise in `[-amplitude, amplitude)`, reproducible from `seed`.
pub fn noise(n_channels: usize, n_samples: usize, amplitude: f64, seed: u64) -> Array2<f64> {
    if amplitude <= 0.0 {
        return Array2::zeros((n_channels, n_samples));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((n_channels, n_samples), || {
        rng.gen_range(-amplitude..amplitude)
    })
}

/// Add a sinusoidal burst to `y` starting at sample `start`.
///
/// The burst is `duration` seconds of a `frequency` Hz sine with peak
/// `amplitude`; samples past the end of `y` are dropped.
pub fn add_burst(y: &mut [f64], sr: u32, start: usize, duration: f64, frequency: f64, amplitude: f64) {
    let burst = tone(frequency, sr, duration);
    for (dst, b) in y.iter_mut().skip(start).zip(burst) {
        *dst += amplitude * b;
    }
}
