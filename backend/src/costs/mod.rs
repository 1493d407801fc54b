//! Cost Model
//!
//! This module provides:
//! - Pricing configuration (`PricingSchedule`, `TransactionRates`)
//! - Cumulative cost accumulation over a usage series (`accumulate`)
//!
//! All series produced here are cumulative: entry *i* is the total charge
//! through month *i*, not the per-month charge.

pub mod accumulate;
pub mod rates;

use thiserror::Error;

// Re-exports
pub use accumulate::{accumulate_storage_cost, accumulate_transaction_cost, combine};
pub use rates::{OperationKind, PricingSchedule, TransactionRates, TIER_USAGE_SCALE};

/// Errors raised by the cost model
///
/// All failures are fail-fast at the boundary of the offending call; there
/// are no retries and no partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CostError {
    /// Negative horizon, empty pricing schedule, or negative/non-finite rate
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Combining series of unequal length
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Reject negative or non-finite rate-like values
///
/// Shared by schedule validation and the accumulation entry points so the
/// message always names the offending field.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), CostError> {
    if !value.is_finite() {
        return Err(CostError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(CostError::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}
