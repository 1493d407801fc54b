//! Integration tests for usage projection
//!
//! Tests cover:
//! - Series length and strict monotonicity
//! - The deployment study's derived-rate arithmetic
//! - InvalidArgument rejection at the projector boundary

use cloud_cost_core_rs::{CostError, UsageProjector};

/// Projector for the deployment study: day rate 414.72 MB per node,
/// 15 nodes, 3 clusters, volumes reported in TB
fn study_projector() -> UsageProjector {
    UsageProjector::new(414.72, 15, 3, 1e6).unwrap()
}

#[test]
fn test_series_has_one_entry_per_month() {
    let projector = study_projector();
    for horizon in [1, 4, 12, 59] {
        let usage = projector.project(horizon).unwrap();
        assert_eq!(usage.len() as i64, horizon);
        assert_eq!(usage.months().first(), Some(&1));
        assert_eq!(usage.months().last(), Some(&horizon));
    }
}

#[test]
fn test_series_is_strictly_increasing_for_positive_rate() {
    let usage = study_projector().project(59).unwrap();
    for pair in usage.values().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_zero_node_count_projects_flat_zero() {
    let projector = UsageProjector::new(414.72, 0, 3, 1e6).unwrap();
    let usage = projector.project(12).unwrap();
    assert!(usage.values().iter().all(|v| *v == 0.0));
}

#[test]
fn test_study_four_month_projection() {
    // 414.72 * 15 * 3 / 10^6 = 0.0186624 TB per month
    let usage = study_projector().project(4).unwrap();

    let expected = [0.0186624, 0.0373248, 0.0559872, 0.0746496];
    assert_eq!(usage.len(), expected.len());
    for (value, want) in usage.values().iter().zip(expected) {
        assert!((value - want).abs() < 1e-9, "got {}, want {}", value, want);
    }
}

#[test]
fn test_monthly_increment_formula() {
    let projector = study_projector();
    assert!((projector.monthly_increment() - 0.0186624).abs() < 1e-12);
}

#[test]
fn test_negative_horizon_is_invalid_argument() {
    let err = study_projector().project(-5).unwrap_err();
    assert!(matches!(err, CostError::InvalidArgument(_)));
}

#[test]
fn test_negative_rate_is_invalid_argument() {
    let err = UsageProjector::new(-414.72, 15, 3, 1e6).unwrap_err();
    assert!(matches!(err, CostError::InvalidArgument(_)));
}
