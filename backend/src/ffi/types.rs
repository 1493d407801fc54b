//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::costs::{OperationKind, PricingSchedule, TransactionRates};
use crate::orchestrator::{ProviderConfig, Report, ScenarioConfig, TraceSeries};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
///
/// # Errors
/// Returns PyValueError if the field is missing or the conversion fails.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns an error only if the type conversion fails (not if missing).
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

fn value_error(message: String) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(message)
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a Python dict to a ScenarioConfig
///
/// Missing scalar fields fall back to the default deployment study
/// values; a missing `providers` list falls back to the default catalog.
///
/// # Errors
///
/// Returns PyErr if type conversions fail or a pricing entry is malformed.
pub fn parse_scenario_config(py_config: &Bound<'_, PyDict>) -> PyResult<ScenarioConfig> {
    let defaults = ScenarioConfig::default();

    let round_interval_minutes: i64 =
        extract_with_default(py_config, "round_interval_minutes", defaults.round_interval_minutes)?;
    let node_data_rate: f64 =
        extract_with_default(py_config, "node_data_rate", defaults.node_data_rate)?;
    let node_count: i64 = extract_with_default(py_config, "node_count", defaults.node_count)?;
    let cluster_count: i64 =
        extract_with_default(py_config, "cluster_count", defaults.cluster_count)?;
    let deployment_years: i64 =
        extract_with_default(py_config, "deployment_years", defaults.deployment_years)?;
    let unit_divisor: f64 =
        extract_with_default(py_config, "unit_divisor", defaults.unit_divisor)?;

    let transaction_operation = match py_config.get_item("transaction_operation")? {
        Some(value) => parse_operation_kind(&value.extract::<String>()?)?,
        None => defaults.transaction_operation,
    };

    let providers = match py_config.get_item("providers")? {
        Some(py_providers) => {
            let provider_list: Bound<'_, PyList> = py_providers.downcast_into()?;
            let mut providers = Vec::new();
            for py_provider in provider_list.iter() {
                let provider_dict: Bound<'_, PyDict> = py_provider.downcast_into()?;
                providers.push(parse_provider_config(&provider_dict)?);
            }
            providers
        }
        None => defaults.providers,
    };

    Ok(ScenarioConfig {
        round_interval_minutes,
        node_data_rate,
        node_count,
        cluster_count,
        deployment_years,
        unit_divisor,
        transaction_operation,
        providers,
    })
}

/// Convert a Python dict to a ProviderConfig
///
/// Expected shape: `{"name": str, "storage": [rates...],
/// "transactions": float | dict | None}`.
pub fn parse_provider_config(py_provider: &Bound<'_, PyDict>) -> PyResult<ProviderConfig> {
    let name: String = extract_required(py_provider, "name")?;

    let storage_rates: Vec<f64> = extract_required(py_provider, "storage")?;
    let storage = PricingSchedule::from_rates(&storage_rates)
        .map_err(|e| value_error(format!("provider '{}': {}", name, e)))?;

    let transactions = match py_provider.get_item("transactions")? {
        Some(value) if !value.is_none() => Some(parse_transaction_rates(&value)?),
        _ => None,
    };

    Ok(ProviderConfig {
        name,
        storage,
        transactions,
    })
}

/// Convert a Python value to a TransactionRates table
///
/// A bare number is a uniform rate. A dict uses the operation keys the
/// vendor tables are published with: "write", "read", "iter_write",
/// "iter_read", "std".
pub fn parse_transaction_rates(value: &Bound<'_, PyAny>) -> PyResult<TransactionRates> {
    if let Ok(rate) = value.extract::<f64>() {
        return Ok(TransactionRates::uniform(rate));
    }

    let table: Bound<'_, PyDict> = value.clone().downcast_into()?;
    Ok(TransactionRates {
        write: extract_required(&table, "write")?,
        read: extract_required(&table, "read")?,
        iterative_write: extract_required(&table, "iter_write")?,
        iterative_read: extract_required(&table, "iter_read")?,
        standard: extract_required(&table, "std")?,
    })
}

/// Parse an operation kind from its table key
pub fn parse_operation_kind(key: &str) -> PyResult<OperationKind> {
    match key {
        "write" => Ok(OperationKind::Write),
        "read" => Ok(OperationKind::Read),
        "iter_write" => Ok(OperationKind::IterativeWrite),
        "iter_read" => Ok(OperationKind::IterativeRead),
        "std" => Ok(OperationKind::Standard),
        other => Err(value_error(format!(
            "Unknown operation kind '{}' (expected write/read/iter_write/iter_read/std)",
            other
        ))),
    }
}

// ========================================================================
// Report Converters
// ========================================================================

/// Convert one trace to a Python dict: `{"name", "months", "values"}`
fn trace_to_py(py: Python, trace: &TraceSeries) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &trace.name)?;
    dict.set_item("months", trace.series.months().to_vec())?;
    dict.set_item("values", trace.series.values().to_vec())?;
    Ok(dict.into())
}

fn traces_to_py(py: Python, traces: &[TraceSeries]) -> PyResult<Py<PyList>> {
    let list = PyList::empty(py);
    for trace in traces {
        list.append(trace_to_py(py, trace)?)?;
    }
    Ok(list.into())
}

/// Convert a Report to nested Python dicts/lists for the chart frontend
///
/// Keys mirror the legend groups: "usage", "storage", "transactions",
/// "combined".
pub fn report_to_py(py: Python, report: &Report) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("usage", trace_to_py(py, &report.usage)?)?;
    dict.set_item("storage", traces_to_py(py, &report.storage)?)?;
    dict.set_item("transactions", traces_to_py(py, &report.transactions)?)?;
    dict.set_item("combined", traces_to_py(py, &report.combined)?)?;
    Ok(dict.into())
}
