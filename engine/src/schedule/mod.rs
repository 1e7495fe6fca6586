//! Fee schedule data structures and the compiled-in standard configuration

pub mod data;
pub mod range;
pub mod tables;

pub use range::{FeeRange, RangeFee, RangeTable, ScheduleError};
pub use tables::{FeeScheduleSet, FixedFeeSchedule, InternetFeeSchedule, PartitionedTable};
