//! Scenario report
//!
//! The output handed to the chart-rendering collaborator: named
//! (month, value) traces grouped under the legend groups the chart page
//! uses. Chart assembly, legend layout, and subplot placement are the
//! collaborator's concern; this module only carries the data.

use serde::{Deserialize, Serialize};

use crate::models::series::TimeSeries;

/// Legend group for cumulative storage cost traces
pub const STORAGE_GROUP: &str = "Storage";

/// Legend group for cumulative transaction cost traces
pub const TRANSACTIONS_GROUP: &str = "Transactions";

/// Legend group for combined (storage + transactions) traces
pub const COMBINED_GROUP: &str = "Combined";

/// One named chart trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSeries {
    /// Trace label (the provider name, or "used storage")
    pub name: String,

    /// The (month, value) data for the trace
    pub series: TimeSeries,
}

impl TraceSeries {
    /// Create a named trace
    pub fn new(name: impl Into<String>, series: TimeSeries) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }
}

/// Complete scenario output
///
/// Serializes to the JSON document the CLI prints and the FFI surface
/// converts to Python structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Projected cumulative storage usage (the chart's first panel)
    pub usage: TraceSeries,

    /// Per-provider cumulative storage cost
    pub storage: Vec<TraceSeries>,

    /// Per-provider cumulative transaction cost
    pub transactions: Vec<TraceSeries>,

    /// Per-provider combined cost (storage + transactions)
    pub combined: Vec<TraceSeries>,
}

impl Report {
    /// Create a report holding only the usage trace
    pub fn new(usage: TraceSeries) -> Self {
        Self {
            usage,
            storage: Vec::new(),
            transactions: Vec::new(),
            combined: Vec::new(),
        }
    }

    /// Iterate the cost groups as (legend group, traces) pairs
    pub fn groups(&self) -> [(&'static str, &[TraceSeries]); 3] {
        [
            (STORAGE_GROUP, self.storage.as_slice()),
            (TRANSACTIONS_GROUP, self.transactions.as_slice()),
            (COMBINED_GROUP, self.combined.as_slice()),
        ]
    }

    /// Total number of cost traces across all groups
    pub fn trace_count(&self) -> usize {
        self.storage.len() + self.transactions.len() + self.combined.len()
    }
}
