//! Compiled-in standard schedule configuration
//!
//! The fee tables below are static business configuration: they change only
//! with a code change, never at runtime. Dollar boundaries from the source
//! schedules are stored as inclusive integer cents, so `$0–$49.99` becomes
//! `0..=4_999` and the tier above it starts at `5_000`.

use crate::models::breakdown::FixedFees;
use crate::schedule::range::{FeeRange, RangeTable};
use crate::schedule::tables::{
    FeeScheduleSet, FixedFeeSchedule, InternetFeeSchedule, PartitionedTable,
};

impl FeeScheduleSet {
    /// The standard configuration: partitioned buyer and internet tables,
    /// unpartitioned broker tiers, title-dependent gate fee.
    pub fn standard() -> Self {
        Self {
            buyer: PartitionedTable::new(
                buyer_clean_light(),
                buyer_clean_heavy(),
                buyer_salvage_light(),
                buyer_salvage_heavy(),
            ),
            internet: InternetFeeSchedule::Partitioned(PartitionedTable::new(
                internet_clean(),
                internet_clean(),
                internet_salvage(),
                internet_salvage(),
            )),
            broker: broker_fees(),
            fixed: standard_fixed_fees(),
        }
    }
}

/// Buyer fee, clean title, light vehicle
///
/// Flat tiers up to $14,999.99, then 12.25% of the bid.
fn buyer_clean_light() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 2_750),
        FeeRange::flat(5_000, 9_999, 5_000),
        FeeRange::flat(10_000, 19_999, 9_000),
        FeeRange::flat(20_000, 29_999, 13_500),
        FeeRange::flat(30_000, 34_999, 13_750),
        FeeRange::flat(35_000, 39_999, 14_000),
        FeeRange::flat(40_000, 44_999, 18_250),
        FeeRange::flat(45_000, 49_999, 18_500),
        FeeRange::flat(50_000, 54_999, 21_250),
        FeeRange::flat(55_000, 59_999, 21_500),
        FeeRange::flat(60_000, 69_999, 24_500),
        FeeRange::flat(70_000, 79_999, 27_000),
        FeeRange::flat(80_000, 89_999, 29_500),
        FeeRange::flat(90_000, 99_999, 32_500),
        FeeRange::flat(100_000, 119_999, 38_500),
        FeeRange::flat(120_000, 129_999, 41_500),
        FeeRange::flat(130_000, 139_999, 43_500),
        FeeRange::flat(140_000, 149_999, 45_500),
        FeeRange::flat(150_000, 159_999, 47_000),
        FeeRange::flat(160_000, 169_999, 49_500),
        FeeRange::flat(170_000, 179_999, 51_000),
        FeeRange::flat(180_000, 199_999, 54_000),
        FeeRange::flat(200_000, 239_999, 59_000),
        FeeRange::flat(240_000, 249_999, 60_500),
        FeeRange::flat(250_000, 299_999, 65_000),
        FeeRange::flat(300_000, 349_999, 77_500),
        FeeRange::flat(350_000, 399_999, 87_500),
        FeeRange::flat(400_000, 449_999, 93_500),
        FeeRange::flat(450_000, 499_999, 100_000),
        FeeRange::flat(500_000, 549_999, 100_000),
        FeeRange::flat(550_000, 599_999, 100_000),
        FeeRange::flat(600_000, 649_999, 105_000),
        FeeRange::flat(650_000, 699_999, 105_000),
        FeeRange::flat(700_000, 749_999, 105_000),
        FeeRange::flat(750_000, 799_999, 106_500),
        FeeRange::flat(800_000, 849_999, 109_000),
        FeeRange::flat(850_000, 899_999, 109_000),
        FeeRange::flat(900_000, 999_999, 109_000),
        FeeRange::flat(1_000_000, 1_049_999, 120_000),
        FeeRange::flat(1_050_000, 1_099_999, 120_000),
        FeeRange::flat(1_100_000, 1_149_999, 120_000),
        FeeRange::flat(1_150_000, 1_199_999, 120_000),
        FeeRange::flat(1_200_000, 1_249_999, 120_000),
        FeeRange::flat(1_250_000, 1_499_999, 120_000),
        FeeRange::percent_open(1_500_000, 0.1225),
    ])
}

/// Buyer fee, clean title, heavy vehicle
///
/// Same flat tiers as clean/light up to $4,499.99, then switches to 20% of
/// the bid from $5,000 up.
fn buyer_clean_heavy() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 2_750),
        FeeRange::flat(5_000, 9_999, 5_000),
        FeeRange::flat(10_000, 19_999, 9_000),
        FeeRange::flat(20_000, 29_999, 13_500),
        FeeRange::flat(30_000, 34_999, 13_750),
        FeeRange::flat(35_000, 39_999, 14_000),
        FeeRange::flat(40_000, 44_999, 18_250),
        FeeRange::flat(45_000, 49_999, 18_500),
        FeeRange::flat(50_000, 54_999, 21_250),
        FeeRange::flat(55_000, 59_999, 21_500),
        FeeRange::flat(60_000, 69_999, 24_500),
        FeeRange::flat(70_000, 79_999, 27_000),
        FeeRange::flat(80_000, 89_999, 29_500),
        FeeRange::flat(90_000, 99_999, 32_500),
        FeeRange::flat(100_000, 119_999, 38_500),
        FeeRange::flat(120_000, 129_999, 41_500),
        FeeRange::flat(130_000, 139_999, 43_500),
        FeeRange::flat(140_000, 149_999, 45_500),
        FeeRange::flat(150_000, 159_999, 47_000),
        FeeRange::flat(160_000, 169_999, 49_500),
        FeeRange::flat(170_000, 179_999, 51_000),
        FeeRange::flat(180_000, 199_999, 54_000),
        FeeRange::flat(200_000, 239_999, 59_000),
        FeeRange::flat(240_000, 249_999, 60_500),
        FeeRange::flat(250_000, 299_999, 65_000),
        FeeRange::flat(300_000, 349_999, 77_500),
        FeeRange::flat(350_000, 399_999, 87_500),
        FeeRange::flat(400_000, 449_999, 93_500),
        FeeRange::flat(450_000, 499_999, 99_500),
        FeeRange::percent(500_000, 599_999, 0.2),
        FeeRange::percent(600_000, 649_999, 0.2),
        FeeRange::percent_open(650_000, 0.2),
    ])
}

/// Buyer fee, salvage title, light vehicle
///
/// Flat tiers up to $14,999.99, then 12.5% of the bid.
fn buyer_salvage_light() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 2_750),
        FeeRange::flat(5_000, 9_999, 5_000),
        FeeRange::flat(10_000, 19_999, 9_000),
        FeeRange::flat(20_000, 29_999, 14_500),
        FeeRange::flat(30_000, 34_999, 15_500),
        FeeRange::flat(35_000, 39_999, 16_750),
        FeeRange::flat(40_000, 44_999, 20_000),
        FeeRange::flat(45_000, 49_999, 21_000),
        FeeRange::flat(50_000, 54_999, 23_500),
        FeeRange::flat(55_000, 59_999, 24_000),
        FeeRange::flat(60_000, 69_999, 27_500),
        FeeRange::flat(70_000, 79_999, 31_250),
        FeeRange::flat(80_000, 89_999, 34_250),
        FeeRange::flat(90_000, 99_999, 37_000),
        FeeRange::flat(100_000, 119_999, 44_000),
        FeeRange::flat(120_000, 129_999, 46_000),
        FeeRange::flat(130_000, 139_999, 48_250),
        FeeRange::flat(140_000, 149_999, 51_000),
        FeeRange::flat(150_000, 159_999, 53_000),
        FeeRange::flat(160_000, 169_999, 55_500),
        FeeRange::flat(170_000, 179_999, 58_250),
        FeeRange::flat(180_000, 199_999, 62_000),
        FeeRange::flat(200_000, 239_999, 66_250),
        FeeRange::flat(240_000, 249_999, 70_500),
        FeeRange::flat(250_000, 299_999, 77_500),
        FeeRange::flat(300_000, 349_999, 83_000),
        FeeRange::flat(350_000, 399_999, 92_750),
        FeeRange::flat(400_000, 449_999, 93_500),
        FeeRange::flat(450_000, 499_999, 100_000),
        FeeRange::flat(500_000, 549_999, 102_500),
        FeeRange::flat(550_000, 599_999, 105_500),
        FeeRange::flat(600_000, 649_999, 108_500),
        FeeRange::flat(650_000, 699_999, 111_000),
        FeeRange::flat(700_000, 749_999, 114_500),
        FeeRange::flat(750_000, 799_999, 117_500),
        FeeRange::flat(800_000, 849_999, 120_000),
        FeeRange::flat(850_000, 899_999, 122_500),
        FeeRange::flat(900_000, 999_999, 122_500),
        FeeRange::flat(1_000_000, 1_049_999, 139_000),
        FeeRange::flat(1_050_000, 1_099_999, 139_000),
        FeeRange::flat(1_100_000, 1_149_999, 139_000),
        FeeRange::flat(1_150_000, 1_199_999, 140_000),
        FeeRange::flat(1_200_000, 1_249_999, 140_000),
        FeeRange::flat(1_250_000, 1_499_999, 140_000),
        FeeRange::percent_open(1_500_000, 0.125),
    ])
}

/// Buyer fee, salvage title, heavy vehicle
///
/// Same flat tiers as salvage/light up to $5,499.99, then 20% of the bid.
fn buyer_salvage_heavy() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 2_750),
        FeeRange::flat(5_000, 9_999, 5_000),
        FeeRange::flat(10_000, 19_999, 9_000),
        FeeRange::flat(20_000, 29_999, 14_500),
        FeeRange::flat(30_000, 34_999, 15_500),
        FeeRange::flat(35_000, 39_999, 16_750),
        FeeRange::flat(40_000, 44_999, 20_000),
        FeeRange::flat(45_000, 49_999, 21_000),
        FeeRange::flat(50_000, 54_999, 23_500),
        FeeRange::flat(55_000, 59_999, 24_000),
        FeeRange::flat(60_000, 69_999, 27_500),
        FeeRange::flat(70_000, 79_999, 31_250),
        FeeRange::flat(80_000, 89_999, 34_250),
        FeeRange::flat(90_000, 99_999, 37_000),
        FeeRange::flat(100_000, 119_999, 44_000),
        FeeRange::flat(120_000, 129_999, 46_000),
        FeeRange::flat(130_000, 139_999, 48_250),
        FeeRange::flat(140_000, 149_999, 51_000),
        FeeRange::flat(150_000, 159_999, 53_000),
        FeeRange::flat(160_000, 169_999, 55_500),
        FeeRange::flat(170_000, 179_999, 58_250),
        FeeRange::flat(180_000, 199_999, 62_000),
        FeeRange::flat(200_000, 239_999, 66_250),
        FeeRange::flat(240_000, 249_999, 70_500),
        FeeRange::flat(250_000, 299_999, 77_500),
        FeeRange::flat(300_000, 349_999, 83_000),
        FeeRange::flat(350_000, 399_999, 92_750),
        FeeRange::flat(400_000, 449_999, 93_500),
        FeeRange::flat(450_000, 499_999, 100_000),
        FeeRange::flat(500_000, 549_999, 102_500),
        FeeRange::percent(550_000, 599_999, 0.2),
        FeeRange::percent(600_000, 649_999, 0.2),
        FeeRange::percent_open(650_000, 0.2),
    ])
}

/// Internet bid fee, clean title (light and heavy share the same tiers)
fn internet_clean() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 9_999, 0),
        FeeRange::flat(10_000, 49_999, 4_900),
        FeeRange::flat(50_000, 99_999, 5_900),
        FeeRange::flat(100_000, 149_999, 7_900),
        FeeRange::flat(150_000, 199_999, 8_900),
        FeeRange::flat(200_000, 399_999, 9_900),
        FeeRange::flat(400_000, 599_999, 10_900),
        FeeRange::flat(600_000, 799_999, 13_900),
        FeeRange::flat_open(800_000, 14_900),
    ])
}

/// Internet bid fee, salvage title (light and heavy share the same tiers)
///
/// The source schedule breaks these tiers at `$X.00 / $X.01` rather than
/// `$X.99 / $X+1.00`; in cents both conventions are contiguous.
fn internet_salvage() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 10_000, 0),
        FeeRange::flat(10_001, 50_000, 5_000),
        FeeRange::flat(50_001, 100_000, 6_500),
        FeeRange::flat(100_001, 150_000, 8_500),
        FeeRange::flat(150_001, 200_000, 9_500),
        FeeRange::flat(200_001, 400_000, 11_000),
        FeeRange::flat(400_001, 600_000, 12_500),
        FeeRange::flat(600_001, 800_000, 14_500),
        FeeRange::flat_open(800_001, 16_000),
    ])
}

/// Broker service fee, independent of title and vehicle type
fn broker_fees() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 599_999, 40_000),
        FeeRange::flat(600_000, 1_099_999, 55_000),
        FeeRange::flat(1_100_000, 1_499_999, 65_000),
        FeeRange::flat_open(1_500_000, 70_000),
    ])
}

/// Standard fixed fees: gate varies by title, the rest are constant
fn standard_fixed_fees() -> FixedFeeSchedule {
    FixedFeeSchedule::ByTitle {
        clean: FixedFees {
            gate: 7_900,
            env: 1_500,
            title: 2_000,
            late: 5_000,
        },
        salvage: FixedFees {
            gate: 9_500,
            env: 1_500,
            title: 2_000,
            late: 5_000,
        },
    }
}
