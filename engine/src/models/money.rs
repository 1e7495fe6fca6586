//! Money parsing and arithmetic
//!
//! CRITICAL: All money values are i64 (cents). Percentage rates are f64
//! fractions and are only ever applied through [`percent_of`], which rounds
//! back to whole cents immediately.

/// Largest accepted bid: $1 trillion, in cents.
///
/// Bids above this are rejected at the parse gate. The cap keeps every
/// downstream fee sum comfortably inside i64 range (a 20% percent tier on
/// the cap is still orders of magnitude below `i64::MAX`) and inside the
/// range where f64 represents whole cents exactly.
pub const MAX_BID_CENTS: i64 = 100_000_000_000_000;

/// Parse a raw bid input into cents.
///
/// Accepts a decimal string, optionally surrounded by whitespace
/// (`"1500"`, `" 1500.75 "`). Returns `None` for anything unparseable,
/// non-finite, negative, or above [`MAX_BID_CENTS`]; the caller treats
/// `None` as "cannot compute".
///
/// # Example
/// ```
/// use auction_fee_core_rs::models::money::parse_bid_amount;
///
/// assert_eq!(parse_bid_amount("1500"), Some(150_000));
/// assert_eq!(parse_bid_amount("1500.75"), Some(150_075));
/// assert_eq!(parse_bid_amount("-1"), None);
/// assert_eq!(parse_bid_amount("abc"), None);
/// assert_eq!(parse_bid_amount("100000000000000000"), None);
/// ```
pub fn parse_bid_amount(input: &str) -> Option<i64> {
    let value: f64 = input.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents > MAX_BID_CENTS as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Percent-of-amount fee in cents, rounded half-up to the nearest cent.
///
/// # Example
/// ```
/// use auction_fee_core_rs::models::money::percent_of;
///
/// // $20,000.00 at 12.25% is exactly $2,450.00
/// assert_eq!(percent_of(2_000_000, 0.1225), 245_000);
/// ```
pub fn percent_of(amount: i64, rate: f64) -> i64 {
    (amount as f64 * rate).round() as i64
}

/// Format cents as a dollar string, e.g. `2_573_00` -> `"2573.00"`.
///
/// Negative values keep their sign (`-5` -> `"-0.05"`), though nothing on
/// the resolution path produces one.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_infinity() {
        assert_eq!(parse_bid_amount("inf"), None);
        assert_eq!(parse_bid_amount("NaN"), None);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(150_000), "1500.00");
        assert_eq!(format_cents(2_750), "27.50");
        assert_eq!(format_cents(5), "0.05");
    }

    #[test]
    fn test_format_cents_keeps_sign_on_small_negatives() {
        assert_eq!(format_cents(-5), "-0.05");
        assert_eq!(format_cents(-150_000), "-1500.00");
        // unsigned_abs keeps i64::MIN from overflowing
        assert_eq!(format_cents(i64::MIN), "-92233720368547758.08");
    }
}
