//! Cloud provider model
//!
//! A provider binds the shared usage projection to one vendor tier's
//! pricing and derives that tier's cost series. Each provider owns its
//! derived series for its own lifetime only; nothing is shared across
//! providers.

use crate::costs::{
    accumulate_storage_cost, accumulate_transaction_cost, CostError, OperationKind,
    PricingSchedule, TransactionRates,
};

use super::series::TimeSeries;

/// One cloud storage offering under evaluation
///
/// # Example
/// ```
/// use cloud_cost_core_rs::{PricingSchedule, Provider, TimeSeries};
///
/// let usage = TimeSeries::new(vec![1, 2], vec![1.0, 2.0]);
/// let provider = Provider::new("simple s3", usage, PricingSchedule::flat(0.5));
/// let cost = provider.storage_cost().unwrap();
/// assert_eq!(cost.values(), &[0.5, 1.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    /// Display name (also the chart trace label)
    name: String,

    /// Projected cumulative usage over the horizon
    usage: TimeSeries,

    /// Storage pricing for this tier
    storage_schedule: PricingSchedule,

    /// Transaction pricing, when the vendor publishes it for this tier
    transaction_rates: Option<TransactionRates>,
}

impl Provider {
    /// Create a storage-only provider
    pub fn new(
        name: impl Into<String>,
        usage: TimeSeries,
        storage_schedule: PricingSchedule,
    ) -> Self {
        Self {
            name: name.into(),
            usage,
            storage_schedule,
            transaction_rates: None,
        }
    }

    /// Attach a per-operation transaction rate table
    pub fn with_transaction_rates(mut self, rates: TransactionRates) -> Self {
        self.transaction_rates = Some(rates);
        self
    }

    /// Provider display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The usage series this provider prices
    pub fn usage(&self) -> &TimeSeries {
        &self.usage
    }

    /// True if a transaction rate table is configured
    pub fn has_transaction_pricing(&self) -> bool {
        self.transaction_rates.is_some()
    }

    /// Cumulative storage cost over the usage series
    pub fn storage_cost(&self) -> Result<TimeSeries, CostError> {
        accumulate_storage_cost(&self.usage, &self.storage_schedule)
    }

    /// Cumulative transaction cost over the usage horizon
    ///
    /// Returns `None` when this tier has no transaction pricing (its
    /// combined series is skipped rather than priced at zero).
    pub fn transaction_cost(
        &self,
        transactions_per_day: f64,
        operation: OperationKind,
    ) -> Result<Option<TimeSeries>, CostError> {
        let Some(rates) = &self.transaction_rates else {
            return Ok(None);
        };
        rates.validate()?;

        let cost = accumulate_transaction_cost(
            self.usage.len() as i64,
            transactions_per_day,
            rates.rate(operation),
        )?;
        Ok(Some(cost))
    }
}
