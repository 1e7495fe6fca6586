//! Schedule containers and shape strategies
//!
//! Two divergent schedule configurations exist in the wild: one partitions
//! the internet bid fee by classification and varies the gate fee by title,
//! the other uses a single flat-with-percent internet table and constant
//! fixed fees. Rather than two engines, the shapes are enum strategies the
//! one engine dispatches on.

use serde::{Deserialize, Serialize};

use crate::models::breakdown::FixedFees;
use crate::models::classification::{TitleType, VehicleType};
use crate::schedule::range::{RangeTable, ScheduleError};

/// One range table per (title, vehicle) partition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionedTable {
    clean_light: RangeTable,
    clean_heavy: RangeTable,
    salvage_light: RangeTable,
    salvage_heavy: RangeTable,
}

impl PartitionedTable {
    pub fn new(
        clean_light: RangeTable,
        clean_heavy: RangeTable,
        salvage_light: RangeTable,
        salvage_heavy: RangeTable,
    ) -> Self {
        Self {
            clean_light,
            clean_heavy,
            salvage_light,
            salvage_heavy,
        }
    }

    /// The range table for one classification
    pub fn partition(&self, title: TitleType, vehicle: VehicleType) -> &RangeTable {
        match (title, vehicle) {
            (TitleType::Clean, VehicleType::Light) => &self.clean_light,
            (TitleType::Clean, VehicleType::Heavy) => &self.clean_heavy,
            (TitleType::Salvage, VehicleType::Light) => &self.salvage_light,
            (TitleType::Salvage, VehicleType::Heavy) => &self.salvage_heavy,
        }
    }

    /// Fee in cents for `amount` under one classification; 0 on a miss
    pub fn resolve(&self, amount: i64, title: TitleType, vehicle: VehicleType) -> i64 {
        self.partition(title, vehicle).resolve(amount)
    }

    /// Validate every partition's range structure
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.clean_light.validate()?;
        self.clean_heavy.validate()?;
        self.salvage_light.validate()?;
        self.salvage_heavy.validate()?;
        Ok(())
    }
}

/// Internet bid fee schedule shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InternetFeeSchedule {
    /// Flat fee per range, partitioned by (title, vehicle)
    Partitioned(PartitionedTable),

    /// Single table of flat fees with an additive percent surcharge;
    /// classification is ignored
    FlatWithPercent(RangeTable),
}

impl InternetFeeSchedule {
    /// Fee in cents for `amount`; 0 on a miss
    pub fn resolve(&self, amount: i64, title: TitleType, vehicle: VehicleType) -> i64 {
        match self {
            InternetFeeSchedule::Partitioned(table) => table.resolve(amount, title, vehicle),
            InternetFeeSchedule::FlatWithPercent(table) => table.resolve(amount),
        }
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            InternetFeeSchedule::Partitioned(table) => table.validate(),
            InternetFeeSchedule::FlatWithPercent(table) => table.validate(),
        }
    }
}

/// Fixed fee schedule shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedFeeSchedule {
    /// Same fixed fees regardless of title
    Constant(FixedFees),

    /// Fixed fees that vary with title condition (gate fee, in practice)
    ByTitle {
        clean: FixedFees,
        salvage: FixedFees,
    },
}

impl FixedFeeSchedule {
    /// The fixed fee set for one title type
    pub fn resolve(&self, title: TitleType) -> FixedFees {
        match self {
            FixedFeeSchedule::Constant(fees) => *fees,
            FixedFeeSchedule::ByTitle { clean, salvage } => match title {
                TitleType::Clean => *clean,
                TitleType::Salvage => *salvage,
            },
        }
    }
}

/// Complete schedule configuration for one engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeScheduleSet {
    /// Buyer fee tables, partitioned by title and vehicle type
    pub buyer: PartitionedTable,

    /// Internet bid fee schedule (either shape)
    pub internet: InternetFeeSchedule,

    /// Broker fee table, unpartitioned
    pub broker: RangeTable,

    /// Fixed per-transaction fees
    pub fixed: FixedFeeSchedule,
}

impl FeeScheduleSet {
    /// Validate every range table in the set
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.buyer.validate()?;
        self.internet.validate()?;
        self.broker.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::range::FeeRange;

    #[test]
    fn test_partition_lookup() {
        let table = PartitionedTable::new(
            RangeTable::new(vec![FeeRange::flat_open(0, 100)]),
            RangeTable::new(vec![FeeRange::flat_open(0, 200)]),
            RangeTable::new(vec![FeeRange::flat_open(0, 300)]),
            RangeTable::new(vec![FeeRange::flat_open(0, 400)]),
        );
        assert_eq!(table.resolve(0, TitleType::Clean, VehicleType::Light), 100);
        assert_eq!(table.resolve(0, TitleType::Clean, VehicleType::Heavy), 200);
        assert_eq!(table.resolve(0, TitleType::Salvage, VehicleType::Light), 300);
        assert_eq!(table.resolve(0, TitleType::Salvage, VehicleType::Heavy), 400);
    }

    #[test]
    fn test_empty_partition_resolves_to_zero() {
        let table = PartitionedTable::default();
        assert_eq!(
            table.resolve(150_000, TitleType::Salvage, VehicleType::Light),
            0
        );
    }

    #[test]
    fn test_flat_with_percent_ignores_classification() {
        let schedule = InternetFeeSchedule::FlatWithPercent(RangeTable::new(vec![
            FeeRange::flat_percent_open(0, 5_000, 0.01),
        ]));
        let clean = schedule.resolve(100_000, TitleType::Clean, VehicleType::Heavy);
        let salvage = schedule.resolve(100_000, TitleType::Salvage, VehicleType::Light);
        assert_eq!(clean, salvage);
        assert_eq!(clean, 5_000 + 1_000);
    }
}
