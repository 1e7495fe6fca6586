//! Fee resolution engine
//!
//! `FeeEngine` owns an immutable schedule set and resolves bid amounts into
//! line-item fee breakdowns. Every operation is a pure function of the
//! engine's configuration and its arguments; nothing here mutates or blocks.
//!
//! # Error policy
//!
//! The resolution path never fails. Invalid input to [`FeeEngine::calculate_total`]
//! yields `None`; a missing partition or a gap in a custom schedule resolves
//! that component to a 0 fee. The only fallible surface is
//! [`FeeEngine::new`], which validates a caller-supplied schedule set once,
//! up front.

use crate::models::breakdown::{FeeBreakdown, FixedFees, QuoteOptions};
use crate::models::classification::{TitleType, VehicleType};
use crate::models::money::parse_bid_amount;
use crate::schedule::range::ScheduleError;
use crate::schedule::tables::FeeScheduleSet;

/// Fee resolution engine over one schedule configuration
///
/// # Example
/// ```
/// use auction_fee_core_rs::{FeeEngine, QuoteOptions, TitleType, VehicleType};
///
/// let engine = FeeEngine::standard();
/// let breakdown = engine
///     .calculate_total(
///         "1500",
///         &QuoteOptions {
///             title_type: Some(TitleType::Clean),
///             vehicle_type: Some(VehicleType::Light),
///             late_payment: false,
///         },
///     )
///     .unwrap();
/// assert_eq!(breakdown.buyer_fee, 47_000); // $470.00
/// assert_eq!(breakdown.total, 257_300); // $2,573.00
/// ```
#[derive(Debug, Clone)]
pub struct FeeEngine {
    schedules: FeeScheduleSet,
}

impl FeeEngine {
    /// Engine over the compiled-in standard configuration
    pub fn standard() -> Self {
        Self {
            schedules: FeeScheduleSet::standard(),
        }
    }

    /// Engine over a caller-supplied schedule set
    ///
    /// Validates every range table once; a malformed table (gap, overlap,
    /// bounded top) is rejected here so the resolution path can stay total.
    pub fn new(schedules: FeeScheduleSet) -> Result<Self, ScheduleError> {
        schedules.validate()?;
        Ok(Self { schedules })
    }

    /// The engine's schedule configuration
    pub fn schedules(&self) -> &FeeScheduleSet {
        &self.schedules
    }

    /// Buyer fee in cents for a bid under one classification
    ///
    /// Flat tiers return their fee verbatim; percent tiers return the
    /// fraction of the amount rounded to cents. 0 when no range matches.
    pub fn buyer_fee(&self, amount: i64, title: TitleType, vehicle: VehicleType) -> i64 {
        self.schedules.buyer.resolve(amount, title, vehicle)
    }

    /// Internet bid fee in cents
    ///
    /// Dispatches on the configured schedule shape: partitioned flat tiers
    /// use the classification, the flat-with-percent table ignores it.
    pub fn internet_bid_fee(&self, amount: i64, title: TitleType, vehicle: VehicleType) -> i64 {
        self.schedules.internet.resolve(amount, title, vehicle)
    }

    /// Broker service fee in cents, tiered by amount alone
    pub fn broker_fee(&self, amount: i64) -> i64 {
        self.schedules.broker.resolve(amount)
    }

    /// Fixed per-transaction fees for one title type
    pub fn fixed_fees(&self, title: TitleType) -> FixedFees {
        self.schedules.fixed.resolve(title)
    }

    /// Compute the full landed cost of a bid
    ///
    /// Parses `input_amount` as a decimal string; returns `None` when it is
    /// unparseable, negative, or above the accepted cap, the only
    /// caller-visible failure. Missing classification options fall back to
    /// salvage / light.
    ///
    /// `total = amount + buyer + internet + gate + env + title + broker`.
    pub fn calculate_total(&self, input_amount: &str, options: &QuoteOptions) -> Option<FeeBreakdown> {
        let amount = parse_bid_amount(input_amount)?;

        let title = options.title_type.unwrap_or_default();
        let vehicle = options.vehicle_type.unwrap_or_default();

        let buyer_fee = self.buyer_fee(amount, title, vehicle);
        let internet_fee = self.internet_bid_fee(amount, title, vehicle);
        let fixed = self.fixed_fees(title);
        let broker_fee = self.broker_fee(amount);

        // Resolved but never charged: the active configuration excludes the
        // late fee from the total and the breakdown even when requested.
        // Likely an unfinished feature; needs product clarification before
        // it is wired into the total.
        let _late_fee = if options.late_payment { fixed.late } else { 0 };

        let total = amount
            + buyer_fee
            + internet_fee
            + fixed.gate
            + fixed.env
            + fixed.title
            + broker_fee;

        Some(FeeBreakdown {
            amount,
            buyer_fee,
            internet_fee,
            gate_fee: fixed.gate,
            env_fee: fixed.env,
            title_fee: fixed.title,
            broker_fee,
            total,
        })
    }
}
