//! Cloud Cost Core - Rust Engine
//!
//! Cumulative cloud storage and transaction cost model with deterministic
//! execution. Estimates multi-year costs for object-storage tiers across
//! several vendors and hands the resulting series to a charting frontend.
//!
//! # Architecture
//!
//! - **core**: Usage projection over the month grid
//! - **models**: Domain types (TimeSeries, Provider)
//! - **costs**: Pricing schedules and cumulative accumulation
//! - **orchestrator**: One-shot scenario run and report assembly
//!
//! # Critical Invariants
//!
//! 1. Cumulative series never decrease (costs only accrue)
//! 2. The run is a single deterministic pass (same config = same report)
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod core;
pub mod costs;
pub mod models;
pub mod orchestrator;

// Re-exports for convenience
pub use crate::core::projection::UsageProjector;
pub use costs::{
    accumulate_storage_cost, accumulate_transaction_cost, combine, CostError, OperationKind,
    PricingSchedule, TransactionRates,
};
pub use models::{provider::Provider, series::TimeSeries};
pub use orchestrator::{
    run_scenario, ProviderConfig, Report, ScenarioConfig, ScenarioError, TraceSeries,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cloud_cost_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::scenario::PyScenario>()?;
    Ok(())
}
