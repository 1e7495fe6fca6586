//! Fee ranges and range tables
//!
//! A schedule is an ordered list of non-overlapping amount ranges, each
//! carrying a fee rule. Tables are small (a few dozen rows at most), so
//! lookup is a linear scan.
//!
//! CRITICAL: All money values are i64 (cents).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::money::percent_of;

/// Fee rule attached to one range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RangeFee {
    /// Fixed fee in cents
    Flat(i64),

    /// Fee as a fraction of the bid amount, rounded to cents
    ///
    /// Used at the top of the buyer fee scale (e.g. 0.1225 above $15,000).
    PercentOfAmount(f64),

    /// Fixed fee plus an additive fraction of the bid amount
    ///
    /// Only the flat-with-percent internet bid schedule uses this shape.
    FlatPlusPercent {
        /// Fixed component (cents)
        fee: i64,
        /// Additive fraction of the amount
        rate: f64,
    },
}

/// One row of a fee schedule: an inclusive amount range and its fee rule
///
/// `max == None` means the range is open-ended above `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRange {
    /// Minimum amount, inclusive (cents)
    pub min: i64,

    /// Maximum amount, inclusive (cents); `None` = unbounded above
    pub max: Option<i64>,

    /// Fee rule for amounts in this range
    pub fee: RangeFee,
}

impl FeeRange {
    /// Bounded flat-fee range
    pub fn flat(min: i64, max: i64, fee: i64) -> Self {
        Self {
            min,
            max: Some(max),
            fee: RangeFee::Flat(fee),
        }
    }

    /// Open-ended flat-fee range
    pub fn flat_open(min: i64, fee: i64) -> Self {
        Self {
            min,
            max: None,
            fee: RangeFee::Flat(fee),
        }
    }

    /// Bounded percent-of-amount range
    pub fn percent(min: i64, max: i64, rate: f64) -> Self {
        Self {
            min,
            max: Some(max),
            fee: RangeFee::PercentOfAmount(rate),
        }
    }

    /// Open-ended percent-of-amount range
    pub fn percent_open(min: i64, rate: f64) -> Self {
        Self {
            min,
            max: None,
            fee: RangeFee::PercentOfAmount(rate),
        }
    }

    /// Bounded flat-plus-percent range
    pub fn flat_percent(min: i64, max: i64, fee: i64, rate: f64) -> Self {
        Self {
            min,
            max: Some(max),
            fee: RangeFee::FlatPlusPercent { fee, rate },
        }
    }

    /// Open-ended flat-plus-percent range
    pub fn flat_percent_open(min: i64, fee: i64, rate: f64) -> Self {
        Self {
            min,
            max: None,
            fee: RangeFee::FlatPlusPercent { fee, rate },
        }
    }

    /// Whether `amount` falls inside this range (inclusive on both ends)
    pub fn contains(&self, amount: i64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }

    /// Fee in cents for an amount inside this range
    pub fn fee_for(&self, amount: i64) -> i64 {
        match self.fee {
            RangeFee::Flat(fee) => fee,
            RangeFee::PercentOfAmount(rate) => percent_of(amount, rate),
            RangeFee::FlatPlusPercent { fee, rate } => fee + percent_of(amount, rate),
        }
    }
}

/// Errors detected when validating a schedule's range structure
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("range starting at {min} is inverted (max {max} < min)")]
    InvertedRange { min: i64, max: i64 },

    #[error("schedule does not start at 0 (first range starts at {min})")]
    DoesNotStartAtZero { min: i64 },

    #[error("ranges ending at {prev_max} and starting at {next_min} leave a gap or overlap")]
    Discontinuity { prev_max: i64, next_min: i64 },

    #[error("range starting at {min} follows an open-ended range")]
    RangeAfterOpenEnd { min: i64 },

    #[error("final range ending at {max} leaves the schedule bounded above")]
    BoundedTop { max: i64 },
}

/// Ordered, non-overlapping sequence of fee ranges
///
/// A well-formed table partitions `[0, ∞)` exactly: every non-negative
/// amount matches exactly one range. An empty table is permitted and
/// resolves every amount to a zero fee: missing schedule data degrades
/// silently rather than failing the whole computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    ranges: Vec<FeeRange>,
}

impl RangeTable {
    pub fn new(ranges: Vec<FeeRange>) -> Self {
        Self { ranges }
    }

    /// Table with no ranges; every lookup resolves to 0
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[FeeRange] {
        &self.ranges
    }

    /// First range containing `amount`, if any
    pub fn find(&self, amount: i64) -> Option<&FeeRange> {
        self.ranges.iter().find(|r| r.contains(amount))
    }

    /// Fee in cents for `amount`, or 0 when no range matches
    pub fn resolve(&self, amount: i64) -> i64 {
        self.find(amount).map_or(0, |r| r.fee_for(amount))
    }

    /// Check that the ranges partition `[0, ∞)` exactly
    ///
    /// Requires: first range starts at 0, consecutive ranges are contiguous
    /// in cents (`next.min == prev.max + 1`), no range follows an open-ended
    /// one, and the final range is open-ended. An empty table passes
    /// vacuously (it is the degrade-to-zero shape).
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.ranges.first() else {
            return Ok(());
        };
        if first.min != 0 {
            return Err(ScheduleError::DoesNotStartAtZero { min: first.min });
        }

        for pair in self.ranges.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            match prev.max {
                None => return Err(ScheduleError::RangeAfterOpenEnd { min: next.min }),
                Some(max) if max < prev.min => {
                    return Err(ScheduleError::InvertedRange { min: prev.min, max })
                }
                Some(max) if next.min != max + 1 => {
                    return Err(ScheduleError::Discontinuity {
                        prev_max: max,
                        next_min: next.min,
                    })
                }
                Some(_) => {}
            }
        }

        let last = self.ranges.last().unwrap();
        match last.max {
            Some(max) if max < last.min => {
                Err(ScheduleError::InvertedRange { min: last.min, max })
            }
            Some(max) => Err(ScheduleError::BoundedTop { max }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let range = FeeRange::flat(5_000, 9_999, 5_000);
        assert!(!range.contains(4_999));
        assert!(range.contains(5_000));
        assert!(range.contains(9_999));
        assert!(!range.contains(10_000));
    }

    #[test]
    fn test_open_range_has_no_upper_bound() {
        let range = FeeRange::percent_open(1_500_000, 0.1225);
        assert!(range.contains(i64::MAX));
        assert!(!range.contains(1_499_999));
    }

    #[test]
    fn test_flat_plus_percent_fee() {
        let range = FeeRange::flat_percent(0, 99_999, 5_000, 0.01);
        // 5000 + 1% of 50000 = 5500
        assert_eq!(range.fee_for(50_000), 5_500);
    }
}
