//! Integration tests for series combination
//!
//! Tests cover:
//! - Elementwise sum and month-index preservation
//! - Commutativity
//! - LengthMismatch rejection

use cloud_cost_core_rs::{combine, CostError, TimeSeries};

#[test]
fn test_combine_is_elementwise_sum() {
    let storage = TimeSeries::new(vec![1, 2, 3], vec![0.1, 0.3, 0.6]);
    let transactions = TimeSeries::new(vec![1, 2, 3], vec![0.05, 0.10, 0.15]);

    let total = combine(&storage, &transactions).unwrap();
    let expected = [0.15, 0.4, 0.75];
    for (got, want) in total.values().iter().zip(expected) {
        assert!((got - want).abs() < 1e-12);
    }
    assert_eq!(total.months(), storage.months());
}

#[test]
fn test_combine_is_commutative() {
    let a = TimeSeries::new(vec![1, 2, 3], vec![0.25, 0.75, 1.5]);
    let b = TimeSeries::new(vec![1, 2, 3], vec![1.0, 1.0, 2.0]);

    assert_eq!(combine(&a, &b).unwrap(), combine(&b, &a).unwrap());
}

#[test]
fn test_combine_rejects_unequal_lengths() {
    let five = TimeSeries::new((1..=5).collect(), vec![1.0; 5]);
    let six = TimeSeries::new((1..=6).collect(), vec![1.0; 6]);

    let err = combine(&five, &six).unwrap_err();
    assert_eq!(err, CostError::LengthMismatch { left: 5, right: 6 });
}

#[test]
fn test_combine_empty_series() {
    let empty = TimeSeries::new(vec![], vec![]);
    assert!(combine(&empty, &empty).unwrap().is_empty());
}
