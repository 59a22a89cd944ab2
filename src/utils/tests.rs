use super::*;
use approx::assert_relative_eq;
use ndarray::Array2;

#[test]
fn test_percentile_matches_linear_interpolation() {
    let v: Vec<f64> = (1..=10).map(f64::from).collect();
    // rank = 0.999 * 9 = 8.991
    assert_relative_eq!(percentile(&v, 99.9).unwrap(), 9.991, epsilon = 1e-12);
    assert_relative_eq!(percentile(&v, 0.0).unwrap(), 1.0);
    assert_relative_eq!(percentile(&v, 25.0).unwrap(), 3.25);
}

#[test]
fn test_percentile_unsorted_with_duplicates() {
    let v = [5.0, 0.0, 0.0, 5.0, 1.0];
    assert_relative_eq!(percentile(&v, 50.0).unwrap(), 1.0);
    assert_relative_eq!(percentile(&v, 90.0).unwrap(), 5.0);
}

#[test]
fn test_percentile_single_and_empty() {
    assert_eq!(percentile(&[3.0], 99.9), Some(3.0));
    assert_eq!(percentile(&[], 50.0), None);
}

#[test]
fn test_round_samples() {
    assert_eq!(round_samples(0.0), 0);
    assert_eq!(round_samples(0.5), 0);
    assert_eq!(round_samples(1.5), 2);
    assert_eq!(round_samples(51.2), 51);
    assert_eq!(round_samples(-3.0), 0);
    assert_eq!(round_samples(f64::NAN), 0);
}

#[test]
fn test_valid_waveform() {
    let y = Array2::<f64>::zeros((2, 8));
    assert!(valid_waveform(&y.view()).is_ok());

    let mut bad = y.clone();
    bad[(1, 3)] = f64::INFINITY;
    assert!(valid_waveform(&bad.view()).is_err());

    let empty = Array2::<f64>::zeros((0, 0));
    assert!(valid_waveform(&empty.view()).is_ok());
}

#[test]
fn test_parameter_validation() {
    assert!(valid_sample_rate(512).is_ok());
    assert!(valid_sample_rate(0).is_err());
    assert!(valid_percentile(0.0).is_ok());
    assert!(valid_percentile(100.0).is_ok());
    assert!(valid_percentile(f64::NAN).is_err());
    assert!(valid_window(0.04).is_ok());
    assert!(valid_window(f64::INFINITY).is_err());
    assert!(valid_window(-0.01).is_err());
}
