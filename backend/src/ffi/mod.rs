//! FFI boundary for the Python charting frontend
//!
//! Keeps the surface minimal: parse a config dict, run the scenario,
//! return the report as plain dicts and lists.

pub mod scenario;
pub mod types;
