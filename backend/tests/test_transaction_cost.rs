//! Integration tests for transaction cost accumulation
//!
//! Tests cover:
//! - Arithmetic progression shape (uniform volume, constant increment)
//! - The deployment study's write-rate numbers
//! - Boundary rejection of negative horizon and rates

use cloud_cost_core_rs::{accumulate_transaction_cost, CostError};

#[test]
fn test_series_is_arithmetic_progression() {
    let cost = accumulate_transaction_cost(24, 288.0, 0.05).unwrap();
    assert_eq!(cost.len(), 24);

    // common difference: 0.05 * (288 * 30) / 10,000 = 0.0432
    let increment = 0.05 * (288.0 * 30.0) / 10_000.0;
    let values = cost.values();
    assert!((values[0] - increment).abs() < 1e-12);
    for pair in values.windows(2) {
        assert!(((pair[1] - pair[0]) - increment).abs() < 1e-9);
    }
}

#[test]
fn test_study_write_cost_over_full_horizon() {
    // gcloud standard writes: 288/day at 0.05 per 10k, 59 months
    let cost = accumulate_transaction_cost(59, 288.0, 0.05).unwrap();
    let last = cost.last_value().unwrap();
    assert!((last - 59.0 * 0.0432).abs() < 1e-9);
}

#[test]
fn test_zero_horizon_yields_empty_series() {
    let cost = accumulate_transaction_cost(0, 288.0, 0.05).unwrap();
    assert!(cost.is_empty());
}

#[test]
fn test_zero_volume_accrues_nothing() {
    let cost = accumulate_transaction_cost(12, 0.0, 0.05).unwrap();
    assert!(cost.values().iter().all(|v| *v == 0.0));
}

#[test]
fn test_negative_horizon_is_invalid_argument() {
    let err = accumulate_transaction_cost(-1, 288.0, 0.05).unwrap_err();
    assert!(matches!(err, CostError::InvalidArgument(_)));
}

#[test]
fn test_negative_rate_is_invalid_argument() {
    let err = accumulate_transaction_cost(12, 288.0, -0.05).unwrap_err();
    assert!(matches!(err, CostError::InvalidArgument(_)));
}
