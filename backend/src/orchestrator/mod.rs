//! Orchestrator - one-shot scenario run
//!
//! Assembles the comparison report from a scenario configuration.
//!
//! See `engine.rs` for the run loop and `report.rs` for the output shape.

pub mod engine;
pub mod report;

// Re-export main types for convenience
pub use engine::{run_scenario, ProviderConfig, ScenarioConfig, ScenarioError};
pub use report::{Report, TraceSeries, COMBINED_GROUP, STORAGE_GROUP, TRANSACTIONS_GROUP};
