//! Scenario Engine
//!
//! One-shot batch run assembling the comparison report:
//! - Usage projection (single series shared by every provider)
//! - Per-provider storage cost accumulation
//! - Per-provider transaction cost accumulation (where priced)
//! - Combined cost series (storage + transactions)
//!
//! The whole computation is a single deterministic pass proportional to
//! the horizon length; same config = identical report.
//!
//! # Example
//!
//! ```
//! use cloud_cost_core_rs::orchestrator::{run_scenario, ScenarioConfig};
//!
//! let config = ScenarioConfig::default();
//! let report = run_scenario(&config).unwrap();
//! assert_eq!(report.usage.series.len() as i64, config.horizon_months());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::projection::UsageProjector;
use crate::costs::{combine, CostError, OperationKind, PricingSchedule, TransactionRates};
use crate::models::provider::Provider;
use crate::models::series::TimeSeries;

use super::report::{Report, TraceSeries};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete scenario configuration
///
/// Constructed once at startup and never mutated; `run_scenario` takes it
/// by shared reference. The default value reproduces the deployment study
/// this tool was built for: a 15-node, 3-cluster fleet evaluated against
/// eleven object-storage tiers across AWS, Google Cloud, and Azure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Minutes between data collection rounds
    pub round_interval_minutes: i64,

    /// Data produced per node per minute (MB)
    pub node_data_rate: f64,

    /// Average nodes in a cluster
    pub node_count: i64,

    /// Number of clusters in the deployment
    pub cluster_count: i64,

    /// Deployment horizon in years
    pub deployment_years: i64,

    /// Divisor converting node volume into chart storage units
    /// (10^6 converts MB to TB)
    pub unit_divisor: f64,

    /// Operation kind whose rate feeds the transaction and combined series
    pub transaction_operation: OperationKind,

    /// Provider catalog, in chart trace order
    pub providers: Vec<ProviderConfig>,
}

/// Per-provider configuration
///
/// Binds a display name to a storage schedule and, where the vendor
/// publishes one for the tier, a per-operation transaction rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Display name (also the chart trace label)
    pub name: String,

    /// Storage pricing for this tier
    pub storage: PricingSchedule,

    /// Transaction pricing (None = storage-only tier)
    pub transactions: Option<TransactionRates>,
}

impl ProviderConfig {
    /// Storage-only tier
    pub fn storage_only(name: impl Into<String>, storage: PricingSchedule) -> Self {
        Self {
            name: name.into(),
            storage,
            transactions: None,
        }
    }

    /// Tier with both storage and transaction pricing
    pub fn with_transactions(
        name: impl Into<String>,
        storage: PricingSchedule,
        transactions: TransactionRates,
    ) -> Self {
        Self {
            name: name.into(),
            storage,
            transactions: Some(transactions),
        }
    }

    /// Bind this configuration to the projected usage series
    fn bind(&self, usage: TimeSeries) -> Provider {
        let provider = Provider::new(self.name.clone(), usage, self.storage.clone());
        match &self.transactions {
            Some(rates) => provider.with_transaction_rates(rates.clone()),
            None => provider,
        }
    }
}

impl ScenarioConfig {
    /// Data produced per node per day (MB)
    pub fn node_day_rate(&self) -> f64 {
        self.node_data_rate * 60.0 * 24.0
    }

    /// Data produced per node per month (MB)
    pub fn node_month_rate(&self) -> f64 {
        self.node_day_rate() * 30.0
    }

    /// Write transactions per day implied by the round interval
    ///
    /// One write per cluster round: `(60 / interval) * 24`, with the
    /// integer division the round schedule actually performs.
    pub fn transactions_per_day(&self) -> f64 {
        ((60 / self.round_interval_minutes) * 24) as f64
    }

    /// Month grid length: indices 1 through `deployment_years * 12 - 1`
    ///
    /// The study's month grid stops one short of the final year boundary
    /// (a 5-year horizon runs 59 months).
    pub fn horizon_months(&self) -> i64 {
        self.deployment_years * 12 - 1
    }

    /// Validate scenario-level fields
    ///
    /// Provider schedules are validated where they are applied, so the
    /// failure names the provider.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.round_interval_minutes <= 0 {
            return Err(ScenarioError::InvalidConfig(format!(
                "round interval must be positive, got {} minutes",
                self.round_interval_minutes
            )));
        }
        if self.deployment_years <= 0 {
            return Err(ScenarioError::InvalidConfig(format!(
                "deployment horizon must be at least one year, got {}",
                self.deployment_years
            )));
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            round_interval_minutes: 5, // one collection round per 5 minutes
            node_data_rate: 0.288,     // MB per node-minute
            node_count: 15,            // avg nodes in a cluster
            cluster_count: 3,          // clusters in the deployment
            deployment_years: 5,
            unit_divisor: 1e6, // chart storage axis in TB
            transaction_operation: OperationKind::Write,
            providers: default_provider_catalog(),
        }
    }
}

/// The eleven-tier provider catalog of the deployment study
///
/// Storage rates are per GB-month; transaction rates per 10k operations.
/// Tiered rows keep the vendor table shape (bracket boundaries equal to
/// the first two rates).
fn default_provider_catalog() -> Vec<ProviderConfig> {
    vec![
        // AWS (storage only)
        ProviderConfig::storage_only(
            "simple s3",
            PricingSchedule::tiered([0.026, 0.025, 0.024], [0.026, 0.025]),
        ),
        ProviderConfig::storage_only("ebs", PricingSchedule::flat(0.12)),
        // additional charges apply when accessing infrequent data
        ProviderConfig::storage_only("efs", PricingSchedule::flat(0.08)),
        ProviderConfig::storage_only("glacier storage", PricingSchedule::flat(0.0115)),
        // Google Cloud
        ProviderConfig::with_transactions(
            "gcloud standard",
            PricingSchedule::flat(0.023),
            TransactionRates::uniform(0.05),
        ),
        ProviderConfig::with_transactions(
            "gcloud nearline",
            PricingSchedule::flat(0.016),
            TransactionRates::uniform(0.10),
        ),
        ProviderConfig::with_transactions(
            "gcloud coldline",
            PricingSchedule::flat(0.007),
            TransactionRates::uniform(0.10),
        ),
        ProviderConfig::with_transactions(
            "gcloud archive",
            PricingSchedule::flat(0.0025),
            TransactionRates::uniform(0.50),
        ),
        // Azure
        ProviderConfig::with_transactions(
            "azure hot standard",
            PricingSchedule::tiered([0.021, 0.02, 0.0191], [0.021, 0.02]),
            TransactionRates {
                write: 0.072,
                read: 0.006,
                iterative_write: 0.072,
                iterative_read: 0.006,
                standard: 0.006,
            },
        ),
        ProviderConfig::with_transactions(
            "azure cold standard",
            PricingSchedule::tiered([0.0115, 0.0115, 0.0115], [0.0115, 0.0115]),
            TransactionRates {
                write: 0.13,
                read: 0.013,
                iterative_write: 0.13,
                iterative_read: 0.013,
                standard: 0.006,
            },
        ),
        ProviderConfig::with_transactions(
            "azure archive standard",
            PricingSchedule::tiered([0.002, 0.002, 0.002], [0.002, 0.002]),
            TransactionRates {
                write: 0.13,
                read: 7.15,
                iterative_write: 0.143,
                iterative_read: 7.15,
                standard: 0.005,
            },
        ),
    ]
}

// ============================================================================
// Errors
// ============================================================================

/// Scenario run error types
///
/// The run aborts at the first failure; provider errors carry the name of
/// the offending provider so the message identifies which schedule failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// Scenario-level configuration error
    #[error("invalid scenario config: {0}")]
    InvalidConfig(String),

    /// A provider's schedule or series derivation failed
    #[error("provider '{provider}': {source}")]
    Provider {
        /// Display name of the failing provider
        provider: String,
        /// Underlying cost model error
        #[source]
        source: CostError,
    },
}

fn provider_error(name: &str, source: CostError) -> ScenarioError {
    ScenarioError::Provider {
        provider: name.to_string(),
        source,
    }
}

// ============================================================================
// Scenario Run
// ============================================================================

/// Run a scenario to completion and assemble the report
///
/// Projects usage once, then derives each provider's cost series in
/// catalog order: storage always, transactions and combined only for
/// tiers with transaction pricing.
///
/// # Errors
///
/// `InvalidConfig` for bad scenario-level fields, `Provider` (carrying
/// the provider name) for a bad schedule or series derivation. Fail-fast:
/// no partial report is returned.
pub fn run_scenario(config: &ScenarioConfig) -> Result<Report, ScenarioError> {
    config.validate()?;

    let projector = UsageProjector::new(
        config.node_month_rate(),
        config.node_count,
        config.cluster_count,
        config.unit_divisor,
    )
    .map_err(|e| ScenarioError::InvalidConfig(e.to_string()))?;

    let usage = projector
        .project(config.horizon_months())
        .map_err(|e| ScenarioError::InvalidConfig(e.to_string()))?;

    let mut report = Report::new(TraceSeries::new("used storage", usage.clone()));
    let transactions_per_day = config.transactions_per_day();

    for provider_config in &config.providers {
        let provider = provider_config.bind(usage.clone());

        let storage_cost = provider
            .storage_cost()
            .map_err(|e| provider_error(provider.name(), e))?;

        let transaction_cost = provider
            .transaction_cost(transactions_per_day, config.transaction_operation)
            .map_err(|e| provider_error(provider.name(), e))?;

        if let Some(transaction_cost) = transaction_cost {
            let combined_cost = combine(&storage_cost, &transaction_cost)
                .map_err(|e| provider_error(provider.name(), e))?;

            report
                .transactions
                .push(TraceSeries::new(provider.name(), transaction_cost));
            report
                .combined
                .push(TraceSeries::new(provider.name(), combined_cost));
        }

        report
            .storage
            .push(TraceSeries::new(provider.name(), storage_cost));
    }

    Ok(report)
}
