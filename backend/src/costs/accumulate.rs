//! Cumulative cost accumulation
//!
//! The three cost-model operations: storage cost over a usage series,
//! transaction cost over a fixed horizon, and elementwise combination.
//! Each is a pure single pass proportional to the horizon length.

use crate::models::series::TimeSeries;

use super::{ensure_non_negative, CostError, PricingSchedule};

/// Days per billing month used by the transaction volume model
const DAYS_PER_MONTH: f64 = 30.0;

/// Operations per pricing unit (rates are quoted per 10k operations)
const OPERATIONS_PER_RATE_UNIT: f64 = 10_000.0;

/// Accumulate cumulative storage cost over a usage series
///
/// For each month the schedule picks a rate from that month's usage and
/// the charge `rate * usage` is added to the running total. The result has
/// one entry per usage entry and is the total-to-date, not the per-month
/// charge.
///
/// An empty usage series yields an empty cost series.
///
/// # Errors
/// `InvalidArgument` if the schedule carries a negative or non-finite rate.
///
/// # Example
/// ```
/// use cloud_cost_core_rs::{accumulate_storage_cost, PricingSchedule, TimeSeries};
///
/// let usage = TimeSeries::new(vec![1, 2], vec![1.0, 2.0]);
/// let cost = accumulate_storage_cost(&usage, &PricingSchedule::flat(0.5)).unwrap();
/// assert_eq!(cost.values(), &[0.5, 1.5]);
/// ```
pub fn accumulate_storage_cost(
    usage: &TimeSeries,
    schedule: &PricingSchedule,
) -> Result<TimeSeries, CostError> {
    schedule.validate()?;

    let mut cost = TimeSeries::with_capacity(usage.len());
    let mut charge = 0.0;
    for (month, used) in usage.iter() {
        charge += schedule.monthly_rate_for(used) * used;
        cost.push(month, charge);
    }
    Ok(cost)
}

/// Accumulate cumulative transaction cost over a fixed horizon
///
/// Transaction volume is assumed uniform across the horizon, so every
/// month adds the same charge `rate_per_10k * (transactions_per_day * 30)
/// / 10000` and the result is an arithmetic progression.
///
/// # Errors
/// `InvalidArgument` for a negative horizon or a negative/non-finite
/// volume or rate.
pub fn accumulate_transaction_cost(
    horizon_months: i64,
    transactions_per_day: f64,
    rate_per_10k: f64,
) -> Result<TimeSeries, CostError> {
    if horizon_months < 0 {
        return Err(CostError::InvalidArgument(format!(
            "horizon must be non-negative, got {} months",
            horizon_months
        )));
    }
    ensure_non_negative("transactions per day", transactions_per_day)?;
    ensure_non_negative("transaction rate per 10k", rate_per_10k)?;

    let monthly_charge =
        rate_per_10k * (transactions_per_day * DAYS_PER_MONTH) / OPERATIONS_PER_RATE_UNIT;

    let mut cost = TimeSeries::with_capacity(horizon_months as usize);
    let mut charge = 0.0;
    for month in 1..=horizon_months {
        charge += monthly_charge;
        cost.push(month, charge);
    }
    Ok(cost)
}

/// Combine storage and transaction cost series elementwise
///
/// Month indices are taken from the first series; both inputs must cover
/// the same number of months.
///
/// # Errors
/// `LengthMismatch` if the series differ in length.
pub fn combine(
    storage_cost: &TimeSeries,
    transaction_cost: &TimeSeries,
) -> Result<TimeSeries, CostError> {
    if storage_cost.len() != transaction_cost.len() {
        return Err(CostError::LengthMismatch {
            left: storage_cost.len(),
            right: transaction_cost.len(),
        });
    }

    let mut total = TimeSeries::with_capacity(storage_cost.len());
    for (index, (month, storage)) in storage_cost.iter().enumerate() {
        // index is in range: lengths were checked above
        let transactions = transaction_cost.values()[index];
        total.push(month, storage + transactions);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_accumulation_is_rate_times_cumulative_sum() {
        let usage = TimeSeries::new(vec![1, 2, 3], vec![1.0, 2.0, 3.0]);
        let cost = accumulate_storage_cost(&usage, &PricingSchedule::flat(0.5)).unwrap();

        // cumulative sums 1, 3, 6 at rate 0.5
        let expected = [0.5, 1.5, 3.0];
        for (value, want) in cost.values().iter().zip(expected) {
            assert!((value - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_usage_yields_empty_cost() {
        let usage = TimeSeries::new(vec![], vec![]);
        let cost = accumulate_storage_cost(&usage, &PricingSchedule::flat(0.1)).unwrap();
        assert!(cost.is_empty());
    }

    #[test]
    fn test_transaction_cost_rejects_negative_horizon() {
        let err = accumulate_transaction_cost(-1, 288.0, 0.05).unwrap_err();
        assert!(matches!(err, CostError::InvalidArgument(_)));
    }

    #[test]
    fn test_combine_length_mismatch() {
        let five = TimeSeries::new((1..=5).collect(), vec![1.0; 5]);
        let six = TimeSeries::new((1..=6).collect(), vec![1.0; 6]);
        assert_eq!(
            combine(&five, &six).unwrap_err(),
            CostError::LengthMismatch { left: 5, right: 6 }
        );
    }
}
