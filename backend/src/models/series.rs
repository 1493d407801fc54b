//! Month-indexed series model
//!
//! The common currency between the usage projector, the cost model, and
//! the report: an ordered sequence of (month, value) pairs, one entry per
//! month of the deployment horizon.
//!
//! CRITICAL: series are immutable once produced. Builders live behind
//! `pub(crate)` so only the projector and the cost model append entries.

use serde::{Deserialize, Serialize};

/// An ordered sequence of (month, value) pairs
///
/// Months are positive 1-based indices; values are non-negative reals
/// (storage volume or accumulated cost, depending on the producer).
/// Cumulative series produced by the cost model are non-decreasing.
///
/// # Example
/// ```
/// use cloud_cost_core_rs::TimeSeries;
///
/// let series = TimeSeries::new(vec![1, 2, 3], vec![0.5, 1.0, 1.5]);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.last_value(), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Month indices (1-based)
    months: Vec<i64>,

    /// Value at each month
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from parallel month and value vectors
    ///
    /// # Panics
    /// Panics if the vectors have different lengths.
    pub fn new(months: Vec<i64>, values: Vec<f64>) -> Self {
        assert!(
            months.len() == values.len(),
            "months and values must have equal length"
        );
        Self { months, values }
    }

    /// Create an empty series with reserved capacity
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            months: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append one (month, value) entry
    pub(crate) fn push(&mut self, month: i64, value: f64) {
        self.months.push(month);
        self.values.push(value);
    }

    /// Number of months covered
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// True if the series covers no months
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Month indices (the x axis of a chart trace)
    pub fn months(&self) -> &[i64] {
        &self.months
    }

    /// Values (the y axis of a chart trace)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Entry at position `index`, if in range
    pub fn get(&self, index: usize) -> Option<(i64, f64)> {
        Some((*self.months.get(index)?, *self.values.get(index)?))
    }

    /// Final value of the series, if any
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Iterate over (month, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.months
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// True if values never decrease from one month to the next
    ///
    /// Holds for every usage series and every cumulative cost series with
    /// non-negative rates.
    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "months and values must have equal length")]
    fn test_mismatched_vectors_panic() {
        TimeSeries::new(vec![1, 2], vec![1.0]);
    }

    #[test]
    fn test_push_and_accessors() {
        let mut series = TimeSeries::with_capacity(2);
        series.push(1, 0.25);
        series.push(2, 0.5);

        assert_eq!(series.len(), 2);
        assert_eq!(series.months(), &[1, 2]);
        assert_eq!(series.values(), &[0.25, 0.5]);
        assert_eq!(series.get(1), Some((2, 0.5)));
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn test_empty_series() {
        let series = TimeSeries::with_capacity(0);
        assert!(series.is_empty());
        assert_eq!(series.last_value(), None);
        assert!(series.is_non_decreasing());
    }

    #[test]
    fn test_non_decreasing_detects_drop() {
        let rising = TimeSeries::new(vec![1, 2, 3], vec![1.0, 1.0, 2.0]);
        assert!(rising.is_non_decreasing());

        let falling = TimeSeries::new(vec![1, 2, 3], vec![1.0, 0.5, 2.0]);
        assert!(!falling.is_non_decreasing());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let series = TimeSeries::new(vec![1, 2], vec![0.1, 0.2]);
        let json = serde_json::to_string(&series).unwrap();
        let restored: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, restored);
    }
}
