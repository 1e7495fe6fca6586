//! Tests for money parsing and percent rounding

use auction_fee_core_rs::{format_cents, parse_bid_amount, percent_of, MAX_BID_CENTS};

#[test]
fn test_parse_integer_dollars() {
    assert_eq!(parse_bid_amount("1500"), Some(150_000));
    assert_eq!(parse_bid_amount("0"), Some(0));
}

#[test]
fn test_parse_fractional_dollars() {
    assert_eq!(parse_bid_amount("1500.75"), Some(150_075));
    assert_eq!(parse_bid_amount("49.99"), Some(4_999));
    assert_eq!(parse_bid_amount("0.01"), Some(1));
}

#[test]
fn test_parse_tolerates_whitespace() {
    assert_eq!(parse_bid_amount("  1500  "), Some(150_000));
    assert_eq!(parse_bid_amount("\t42.50\n"), Some(4_250));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_bid_amount("abc"), None);
    assert_eq!(parse_bid_amount(""), None);
    assert_eq!(parse_bid_amount("12,50"), None);
    assert_eq!(parse_bid_amount("$1500"), None);
}

#[test]
fn test_parse_rejects_amounts_above_the_cap() {
    // Without the cap these would saturate to i64::MAX cents and the fee
    // sum downstream would overflow.
    assert_eq!(parse_bid_amount("100000000000000000"), None);
    assert_eq!(parse_bid_amount("1e18"), None);
    assert_eq!(parse_bid_amount("1000000000000.01"), None);

    // The cap itself ($1 trillion) is the last accepted value
    assert_eq!(parse_bid_amount("1000000000000"), Some(MAX_BID_CENTS));
}

#[test]
fn test_parse_rejects_negative() {
    assert_eq!(parse_bid_amount("-1"), None);
    assert_eq!(parse_bid_amount("-0.01"), None);
}

#[test]
fn test_parse_accepts_negative_zero() {
    // -0.0 is not less than zero; it parses to 0 cents
    assert_eq!(parse_bid_amount("-0"), Some(0));
}

#[test]
fn test_percent_of_is_exact_at_the_published_rates() {
    // $20,000.00 at 12.25% = $2,450.00, no float residue
    assert_eq!(percent_of(2_000_000, 0.1225), 245_000);
    // $20,000.00 at 12.5% = $2,500.00
    assert_eq!(percent_of(2_000_000, 0.125), 250_000);
    // $5,000.00 at 20% = $1,000.00
    assert_eq!(percent_of(500_000, 0.2), 100_000);
}

#[test]
fn test_percent_of_rounds_half_up() {
    // 333 cents at 10% = 33.3 cents -> 33
    assert_eq!(percent_of(333, 0.1), 33);
    // 335 cents at 10% = 33.5 cents -> 34
    assert_eq!(percent_of(335, 0.1), 34);
}

#[test]
fn test_format_cents_round_trips_through_parse() {
    for cents in [0, 1, 99, 100, 4_999, 150_075, 257_300] {
        let formatted = format_cents(cents);
        assert_eq!(parse_bid_amount(&formatted), Some(cents), "cents={cents}");
    }
}
