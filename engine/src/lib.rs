//! Auction Fee Engine - Core
//!
//! Pure, synchronous fee-resolution engine for vehicle-auction bids: maps
//! (bid amount, title type, vehicle type, options) to a line-item fee
//! breakdown using tiered range schedules.
//!
//! # Architecture
//!
//! - **models**: Domain types (money, classification, breakdown)
//! - **schedule**: Range tables, schedule shapes, compiled-in configuration
//! - **quote**: The `FeeEngine` resolvers and `calculate_total` orchestrator
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Schedule data is immutable after engine construction
//! 3. The resolution path is total: invalid input is `None`, missing
//!    schedule data degrades to a 0 fee, nothing panics

// Module declarations
pub mod models;
pub mod quote;
pub mod schedule;

// Re-exports for convenience
pub use models::{
    breakdown::{FeeBreakdown, FixedFees, QuoteOptions},
    classification::{TitleType, VehicleType},
    money::{format_cents, parse_bid_amount, percent_of, MAX_BID_CENTS},
};
pub use quote::FeeEngine;
pub use schedule::{
    range::{FeeRange, RangeFee, RangeTable, ScheduleError},
    tables::{FeeScheduleSet, FixedFeeSchedule, InternetFeeSchedule, PartitionedTable},
};
