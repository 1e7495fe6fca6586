//! Quote inputs and outputs
//!
//! `QuoteOptions` is what a caller supplies alongside the raw bid amount;
//! `FeeBreakdown` is the line-item result. All money values are i64 cents.

use serde::{Deserialize, Serialize};

use crate::models::classification::{TitleType, VehicleType};

/// Caller-supplied options for a quote
///
/// Missing classification fields fall back to the defaults
/// (salvage title, light vehicle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteOptions {
    /// Vehicle title condition (default: salvage)
    #[serde(default)]
    pub title_type: Option<TitleType>,

    /// Vehicle weight class (default: light)
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,

    /// Whether the late-payment fee applies
    ///
    /// NOTE: the active configuration resolves this fee but never adds it to
    /// the total or the breakdown; likely an unfinished feature, so do not
    /// wire it in without product sign-off.
    #[serde(default)]
    pub late_payment: bool,
}

/// Line-item fee breakdown for a single bid
///
/// `total` is the bid amount plus every fee component listed here. The
/// late-payment fee is intentionally not a component (see `QuoteOptions`).
///
/// # Example
/// ```
/// use auction_fee_core_rs::{FeeEngine, QuoteOptions};
///
/// let engine = FeeEngine::standard();
/// let breakdown = engine.calculate_total("1500", &QuoteOptions::default()).unwrap();
/// assert_eq!(breakdown.total, breakdown.amount
///     + breakdown.buyer_fee + breakdown.internet_fee + breakdown.gate_fee
///     + breakdown.env_fee + breakdown.title_fee + breakdown.broker_fee);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Parsed bid amount (cents)
    pub amount: i64,

    /// Buyer fee, tiered by amount and classification (cents)
    pub buyer_fee: i64,

    /// Internet bid fee (cents)
    pub internet_fee: i64,

    /// Gate fee (cents)
    pub gate_fee: i64,

    /// Environmental fee (cents)
    pub env_fee: i64,

    /// Title mailing fee (cents)
    pub title_fee: i64,

    /// Broker service fee, tiered by amount (cents)
    pub broker_fee: i64,

    /// Bid amount plus all fee components (cents)
    pub total: i64,
}

impl FeeBreakdown {
    /// Sum of the fee components alone, excluding the bid amount
    pub fn fees(&self) -> i64 {
        self.buyer_fee
            + self.internet_fee
            + self.gate_fee
            + self.env_fee
            + self.title_fee
            + self.broker_fee
    }
}

/// Per-transaction constant fees (cents)
///
/// `gate` may vary with title type depending on the configured
/// [`FixedFeeSchedule`](crate::schedule::FixedFeeSchedule); `env` and
/// `title` are invariant in every observed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFees {
    /// Gate fee (cents)
    pub gate: i64,

    /// Environmental fee (cents)
    pub env: i64,

    /// Title mailing fee (cents)
    pub title: i64,

    /// Late-payment fee (cents), resolved but currently never charged
    pub late: i64,
}
