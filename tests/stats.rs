pub mod common;
use common::*;
use recheck::stats::{chi_squared, MedianEstimator};

#[test]
fn accepts_equal_buckets() {
    assert_eq!(chi_squared(&[10.0, 10.0], &[10.0, 10.0], 3.0), 0.0);
}

#[test]
#[should_panic]
fn rejects_empty_buckets() {
    chi_squared(&[], &[], 3.0);
}

#[test]
#[should_panic]
fn rejects_mismatched_lengths() {
    chi_squared(&[10.0, 10.0], &[20.0], 3.0);
}

#[test]
#[should_panic]
fn rejects_small_expected_counts() {
    chi_squared(&[3.0, 3.0], &[3.0, 3.0], 3.0);
}

#[test]
#[should_panic]
fn rejects_skewed_counts() {
    chi_squared(&[100.0, 100.0], &[10.0, 190.0], 6.0);
}

#[test]
fn digits_are_uniform() {
    let mut counts = [0.0; 10];
    for value in (0..10u8).samples().take(10_000) {
        counts[value as usize] += 1.0;
    }
    chi_squared(&[1000.0; 10], &counts, 6.0);
}

#[test]
fn letters_are_uniform() {
    let mut counts = [0.0; 52];
    for value in letter().samples().take(10_400) {
        let index = if value.is_ascii_lowercase() {
            value as usize - 'a' as usize
        } else {
            26 + value as usize - 'A' as usize
        };
        counts[index] += 1.0;
    }
    chi_squared(&[200.0; 52], &counts, 6.0);
}

#[test]
fn starts_empty() {
    let estimator = MedianEstimator::default();
    assert!(estimator.is_empty());
    assert_eq!(estimator.len(), 0);
    assert_eq!(estimator.median(), None);
    assert_eq!(estimator.quartile1(), None);
    assert_eq!(estimator.quartile3(), None);
    assert_eq!(estimator.minimum(), None);
    assert_eq!(estimator.maximum(), None);
}

#[test]
fn is_exact_for_the_first_observations() {
    let mut estimator = MedianEstimator::new();
    let expected = [3.0, 2.0, 3.0, 2.5, 3.0];
    for (value, median) in [3.0, 1.0, 5.0, 2.0, 4.0].into_iter().zip(expected) {
        estimator.observe(value);
        assert_eq!(estimator.median(), Some(median));
    }
    assert!(!estimator.is_empty());
    assert_eq!(estimator.len(), 5);
    assert_eq!(estimator.minimum(), Some(1.0));
    assert_eq!(estimator.maximum(), Some(5.0));
    assert_eq!(estimator.quartile1(), Some(2.0));
    assert_eq!(estimator.quartile3(), Some(4.0));
}

#[test]
fn matches_the_reference_dataset() {
    let observations = [
        0.02, 0.15, 0.74, 3.39, 0.83, 22.37, 10.15, 15.43, 38.62, 15.92, 34.60, 10.28, 1.47,
        0.40, 0.05, 11.39, 0.27, 0.42, 0.09, 11.37,
    ];
    let mut estimator = MedianEstimator::new();
    for value in observations {
        estimator.observe(value);
    }
    let median = estimator.median().unwrap();
    assert!((median - 4.440634353260338).abs() < 1e-9);
    assert_eq!(estimator.minimum(), Some(0.02));
    assert_eq!(estimator.maximum(), Some(38.62));
    assert_eq!(estimator.len(), 20);
}

#[test]
fn tracks_uniform_draws() {
    let mut estimator = MedianEstimator::new();
    for value in unit::<f64>().samples().take(1000) {
        estimator.observe(value);
    }
    assert!((estimator.median().unwrap() - 0.5).abs() < 0.08);
    assert!((estimator.quartile1().unwrap() - 0.25).abs() < 0.08);
    assert!((estimator.quartile3().unwrap() - 0.75).abs() < 0.08);
    assert!(estimator.minimum().unwrap() >= 0.0);
    assert!(estimator.maximum().unwrap() < 1.0);
    assert_eq!(estimator.len(), 1000);
}
