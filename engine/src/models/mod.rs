//! Domain types: money, classification, quote inputs and outputs

pub mod breakdown;
pub mod classification;
pub mod money;

pub use breakdown::{FeeBreakdown, FixedFees, QuoteOptions};
pub use classification::{TitleType, VehicleType};
