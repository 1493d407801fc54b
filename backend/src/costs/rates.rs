//! Pricing Rates and Related Types
//!
//! Defines the pricing shapes the cost model understands: flat or tiered
//! per-GB storage schedules, and per-operation transaction rate tables.
//! All rates are in currency units per GB-month (storage) or per 10k
//! operations (transactions).

use serde::{Deserialize, Serialize};

use super::{ensure_non_negative, CostError};

/// Fixed scale applied to a month's usage before tier comparison
///
/// Tiered vendor tables express their bracket boundaries at a different
/// magnitude than the usage series; the published tables are preserved
/// as-is, including this scaling.
pub const TIER_USAGE_SCALE: f64 = 1_000.0;

/// Storage pricing schedule for one provider tier
///
/// Either a single flat rate, or three rates with two bracket boundaries.
/// Tiered schedules pick exactly one rate bracket per month from that
/// month's instantaneous usage; there is no graduated pricing within a
/// single month.
///
/// # Example
/// ```
/// use cloud_cost_core_rs::PricingSchedule;
///
/// let flat = PricingSchedule::flat(0.023);
/// assert_eq!(flat.monthly_rate_for(5.0), 0.023);
///
/// let tiered = PricingSchedule::tiered([0.026, 0.025, 0.024], [1.0, 2.0]);
/// // usage 0.001 scales to 1.0: not below the first boundary, within the
/// // second (ties go to the middle tier)
/// assert_eq!(tiered.monthly_rate_for(0.001), 0.025);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PricingSchedule {
    /// One rate applied uniformly regardless of usage magnitude
    Flat {
        /// Cost per GB-month
        rate: f64,
    },

    /// Three rates selected by the current month's usage magnitude
    Tiered {
        /// Bracket rates, lowest usage bracket first
        rates: [f64; 3],

        /// Bracket boundaries, compared against scaled usage
        thresholds: [f64; 2],
    },
}

impl PricingSchedule {
    /// Flat schedule with a single rate
    pub fn flat(rate: f64) -> Self {
        Self::Flat { rate }
    }

    /// Tiered schedule with explicit rates and bracket boundaries
    pub fn tiered(rates: [f64; 3], thresholds: [f64; 2]) -> Self {
        Self::Tiered { rates, thresholds }
    }

    /// Build a schedule from a vendor rate table row
    ///
    /// A one-entry row is a flat schedule. A three-entry row is a tiered
    /// schedule whose bracket boundaries are the first two rates, the
    /// shape the vendor tier tables publish. That shape is preserved per
    /// provider rather than converted to a unified unit system.
    ///
    /// # Errors
    /// `InvalidArgument` for any other row length, including empty.
    pub fn from_rates(rates: &[f64]) -> Result<Self, CostError> {
        match rates {
            [rate] => Ok(Self::flat(*rate)),
            [r0, r1, r2] => Ok(Self::tiered([*r0, *r1, *r2], [*r0, *r1])),
            _ => Err(CostError::InvalidArgument(format!(
                "pricing schedule requires 1 (flat) or 3 (tiered) rates, got {}",
                rates.len()
            ))),
        }
    }

    /// Check that all rates and boundaries are non-negative and finite
    pub fn validate(&self) -> Result<(), CostError> {
        match self {
            Self::Flat { rate } => ensure_non_negative("flat rate", *rate),
            Self::Tiered { rates, thresholds } => {
                for (i, rate) in rates.iter().enumerate() {
                    ensure_non_negative(&format!("tier rate {}", i), *rate)?;
                }
                for (i, threshold) in thresholds.iter().enumerate() {
                    ensure_non_negative(&format!("tier threshold {}", i), *threshold)?;
                }
                Ok(())
            }
        }
    }

    /// Rate bracket for one month's instantaneous usage
    ///
    /// Tie-break at the exact second boundary goes to the middle tier.
    pub fn monthly_rate_for(&self, usage: f64) -> f64 {
        match self {
            Self::Flat { rate } => *rate,
            Self::Tiered { rates, thresholds } => {
                let scaled = usage * TIER_USAGE_SCALE;
                if scaled < thresholds[0] {
                    rates[0]
                } else if scaled <= thresholds[1] {
                    rates[1]
                } else {
                    rates[2]
                }
            }
        }
    }
}

/// Transaction operation kind
///
/// Vendors price object-store transactions per operation class; the table
/// below keys rates by this enum instead of operation-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Single-object write (PUT/create)
    Write,
    /// Single-object read (GET)
    Read,
    /// Write issued from an iterator/list operation
    IterativeWrite,
    /// Read issued from an iterator/list operation
    IterativeRead,
    /// All other (metadata/standard) operations
    Standard,
}

/// Per-operation transaction rates for one provider tier
///
/// Rates are per 10k operations. Providers that publish a single
/// transaction rate use [`TransactionRates::uniform`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRates {
    /// Write rate per 10k operations
    pub write: f64,

    /// Read rate per 10k operations
    pub read: f64,

    /// Iterative write rate per 10k operations
    pub iterative_write: f64,

    /// Iterative read rate per 10k operations
    pub iterative_read: f64,

    /// Standard/other operation rate per 10k operations
    pub standard: f64,
}

impl TransactionRates {
    /// One rate for every operation kind
    pub fn uniform(rate: f64) -> Self {
        Self {
            write: rate,
            read: rate,
            iterative_write: rate,
            iterative_read: rate,
            standard: rate,
        }
    }

    /// Rate for a given operation kind
    pub fn rate(&self, kind: OperationKind) -> f64 {
        match kind {
            OperationKind::Write => self.write,
            OperationKind::Read => self.read,
            OperationKind::IterativeWrite => self.iterative_write,
            OperationKind::IterativeRead => self.iterative_read,
            OperationKind::Standard => self.standard,
        }
    }

    /// Check that every rate is non-negative and finite
    pub fn validate(&self) -> Result<(), CostError> {
        ensure_non_negative("write rate", self.write)?;
        ensure_non_negative("read rate", self.read)?;
        ensure_non_negative("iterative write rate", self.iterative_write)?;
        ensure_non_negative("iterative read rate", self.iterative_read)?;
        ensure_non_negative("standard rate", self.standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rates_single_is_flat() {
        let schedule = PricingSchedule::from_rates(&[0.12]).unwrap();
        assert_eq!(schedule, PricingSchedule::flat(0.12));
    }

    #[test]
    fn test_from_rates_triple_reuses_leading_rates_as_boundaries() {
        let schedule = PricingSchedule::from_rates(&[0.026, 0.025, 0.024]).unwrap();
        assert_eq!(
            schedule,
            PricingSchedule::tiered([0.026, 0.025, 0.024], [0.026, 0.025])
        );
    }

    #[test]
    fn test_from_rates_rejects_empty_and_odd_lengths() {
        assert!(matches!(
            PricingSchedule::from_rates(&[]),
            Err(CostError::InvalidArgument(_))
        ));
        assert!(matches!(
            PricingSchedule::from_rates(&[0.1, 0.2]),
            Err(CostError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tier_bracket_selection() {
        let schedule = PricingSchedule::tiered([0.026, 0.025, 0.024], [1.0, 2.0]);

        // below first boundary after x1000 scaling
        assert_eq!(schedule.monthly_rate_for(0.0005), 0.026);
        // exactly on the first boundary: middle tier
        assert_eq!(schedule.monthly_rate_for(0.001), 0.025);
        // exactly on the second boundary: still middle tier
        assert_eq!(schedule.monthly_rate_for(0.002), 0.025);
        // above the second boundary
        assert_eq!(schedule.monthly_rate_for(0.003), 0.024);
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        assert!(PricingSchedule::flat(-0.01).validate().is_err());
        assert!(PricingSchedule::tiered([0.1, -0.2, 0.3], [1.0, 2.0])
            .validate()
            .is_err());
        assert!(PricingSchedule::flat(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_uniform_rates_cover_all_kinds() {
        let rates = TransactionRates::uniform(0.05);
        for kind in [
            OperationKind::Write,
            OperationKind::Read,
            OperationKind::IterativeWrite,
            OperationKind::IterativeRead,
            OperationKind::Standard,
        ] {
            assert_eq!(rates.rate(kind), 0.05);
        }
    }

    #[test]
    fn test_rate_table_lookup() {
        let rates = TransactionRates {
            write: 0.072,
            read: 0.006,
            iterative_write: 0.072,
            iterative_read: 0.006,
            standard: 0.006,
        };
        assert_eq!(rates.rate(OperationKind::Write), 0.072);
        assert_eq!(rates.rate(OperationKind::Read), 0.006);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_schedule_serialize_roundtrip() {
        let schedule = PricingSchedule::tiered([0.021, 0.02, 0.0191], [0.021, 0.02]);
        let json = serde_json::to_string(&schedule).unwrap();
        let restored: PricingSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, restored);
    }
}
