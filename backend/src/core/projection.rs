//! Storage usage projection
//!
//! Projects cumulative storage usage over the deployment horizon. The
//! fleet writes at a fixed rate, so each month adds the same volume:
//! `monthly_rate * node_count * cluster_count / unit_divisor`.
//!
//! This module is deterministic and pure; the projection is a single pass
//! over the month grid.

use crate::costs::{ensure_non_negative, CostError};
use crate::models::series::TimeSeries;

/// Projects a monotonically non-decreasing cumulative usage series
///
/// # Example
/// ```
/// use cloud_cost_core_rs::UsageProjector;
///
/// // 15 nodes per cluster, 3 clusters, 1 MB per node-month, volumes in MB
/// let projector = UsageProjector::new(1.0, 15, 3, 1.0).unwrap();
/// let usage = projector.project(2).unwrap();
/// assert_eq!(usage.values(), &[45.0, 90.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UsageProjector {
    /// Data volume added per node per month, before unit scaling
    monthly_rate: f64,

    /// Average nodes in a cluster
    node_count: i64,

    /// Number of clusters in the deployment
    cluster_count: i64,

    /// Divisor converting the node rate into the desired storage unit
    /// (e.g. 10^6 converts MB to TB)
    unit_divisor: f64,
}

impl UsageProjector {
    /// Create a projector
    ///
    /// # Errors
    /// `InvalidArgument` if the rate is negative or non-finite, a count is
    /// negative, or the divisor is not strictly positive.
    pub fn new(
        monthly_rate: f64,
        node_count: i64,
        cluster_count: i64,
        unit_divisor: f64,
    ) -> Result<Self, CostError> {
        ensure_non_negative("monthly rate", monthly_rate)?;
        if node_count < 0 {
            return Err(CostError::InvalidArgument(format!(
                "node count must be non-negative, got {}",
                node_count
            )));
        }
        if cluster_count < 0 {
            return Err(CostError::InvalidArgument(format!(
                "cluster count must be non-negative, got {}",
                cluster_count
            )));
        }
        if !unit_divisor.is_finite() || unit_divisor <= 0.0 {
            return Err(CostError::InvalidArgument(format!(
                "unit divisor must be positive, got {}",
                unit_divisor
            )));
        }

        Ok(Self {
            monthly_rate,
            node_count,
            cluster_count,
            unit_divisor,
        })
    }

    /// Volume added to the running total each month, in storage units
    pub fn monthly_increment(&self) -> f64 {
        self.monthly_rate * self.node_count as f64 * self.cluster_count as f64
            / self.unit_divisor
    }

    /// Project cumulative usage for months 1..=horizon_months
    ///
    /// The result is non-decreasing by construction (no deletion is
    /// modeled), and strictly increasing when the monthly increment is
    /// positive. A zero horizon yields an empty series.
    ///
    /// # Errors
    /// `InvalidArgument` for a negative horizon.
    pub fn project(&self, horizon_months: i64) -> Result<TimeSeries, CostError> {
        if horizon_months < 0 {
            return Err(CostError::InvalidArgument(format!(
                "horizon must be non-negative, got {} months",
                horizon_months
            )));
        }

        let increment = self.monthly_increment();
        let mut usage = TimeSeries::with_capacity(horizon_months as usize);
        let mut total = 0.0;
        for month in 1..=horizon_months {
            total += increment;
            usage.push(month, total);
        }
        Ok(usage)
    }
}
