//! PyO3 wrapper for the scenario engine
//!
//! This module provides the Python interface to the Rust cost model.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::orchestrator::run_scenario;
use crate::orchestrator::ScenarioConfig;

use super::types::{parse_scenario_config, report_to_py};

/// Python wrapper for a scenario run
///
/// # Example (from Python)
///
/// ```python
/// from cloud_cost_core_rs import Scenario
///
/// scenario = Scenario()  # default deployment study
/// report = scenario.run()
/// for trace in report["storage"]:
///     plot(trace["months"], trace["values"], label=trace["name"])
/// ```
#[pyclass(name = "Scenario")]
pub struct PyScenario {
    config: ScenarioConfig,
}

#[pymethods]
impl PyScenario {
    /// Create a scenario from an optional configuration dict
    ///
    /// # Arguments
    ///
    /// * `config` - Optional dict; missing fields fall back to the
    ///   default deployment study (see `parse_scenario_config`)
    ///
    /// # Errors
    ///
    /// Raises ValueError if a field has the wrong type or a pricing entry
    /// is malformed.
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config {
            Some(py_config) => parse_scenario_config(py_config)?,
            None => ScenarioConfig::default(),
        };
        Ok(PyScenario { config })
    }

    /// Run the scenario to completion
    ///
    /// # Returns
    ///
    /// Dict with the usage trace and the three legend groups:
    /// - `usage`: `{"name", "months", "values"}`
    /// - `storage`, `transactions`, `combined`: lists of the same shape
    ///
    /// # Errors
    ///
    /// Raises RuntimeError naming the provider whose schedule failed.
    fn run(&self, py: Python) -> PyResult<Py<PyDict>> {
        let report = run_scenario(&self.config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Scenario run failed: {}",
                e
            ))
        })?;

        report_to_py(py, &report)
    }

    /// Month grid length of this scenario
    fn horizon_months(&self) -> i64 {
        self.config.horizon_months()
    }

    /// Write transactions per day implied by the round interval
    fn transactions_per_day(&self) -> f64 {
        self.config.transactions_per_day()
    }

    /// Provider display names, in catalog order
    fn provider_names(&self) -> Vec<String> {
        self.config
            .providers
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }
}
