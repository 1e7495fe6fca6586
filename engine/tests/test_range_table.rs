//! Tests for range tables: lookup, boundary behavior, validation

use auction_fee_core_rs::{FeeRange, RangeTable, ScheduleError};

fn sample_table() -> RangeTable {
    RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 2_750),
        FeeRange::flat(5_000, 9_999, 5_000),
        FeeRange::percent_open(10_000, 0.1),
    ])
}

#[test]
fn test_find_matches_first_containing_range() {
    let table = sample_table();
    assert_eq!(table.find(0).unwrap().min, 0);
    assert_eq!(table.find(4_999).unwrap().min, 0);
    assert_eq!(table.find(5_000).unwrap().min, 5_000);
    assert_eq!(table.find(123_456).unwrap().min, 10_000);
}

#[test]
fn test_boundary_has_no_gap_and_no_double_match() {
    let table = sample_table();
    // In cents, adjacent tiers meet at max/max+1: every amount around the
    // seam matches exactly one range.
    for amount in 4_998..=5_001 {
        let matches = table
            .ranges()
            .iter()
            .filter(|r| r.contains(amount))
            .count();
        assert_eq!(matches, 1, "amount={amount}");
    }
}

#[test]
fn test_resolve_flat_and_percent() {
    let table = sample_table();
    assert_eq!(table.resolve(2_500), 2_750);
    assert_eq!(table.resolve(20_000), 2_000); // 10% of 20_000 cents
}

#[test]
fn test_resolve_degrades_to_zero_on_gap() {
    // Malformed table with a hole between 99 and 200
    let table = RangeTable::new(vec![
        FeeRange::flat(0, 99, 10),
        FeeRange::flat_open(200, 20),
    ]);
    assert_eq!(table.resolve(150), 0);
}

#[test]
fn test_empty_table_resolves_to_zero() {
    let table = RangeTable::empty();
    assert_eq!(table.resolve(0), 0);
    assert_eq!(table.resolve(1_000_000), 0);
    assert!(table.find(0).is_none());
}

#[test]
fn test_validate_accepts_well_formed_table() {
    assert_eq!(sample_table().validate(), Ok(()));
    assert_eq!(RangeTable::empty().validate(), Ok(()));
}

#[test]
fn test_validate_rejects_gap() {
    let table = RangeTable::new(vec![
        FeeRange::flat(0, 99, 10),
        FeeRange::flat_open(200, 20),
    ]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::Discontinuity {
            prev_max: 99,
            next_min: 200
        })
    );
}

#[test]
fn test_validate_rejects_overlap() {
    let table = RangeTable::new(vec![
        FeeRange::flat(0, 100, 10),
        FeeRange::flat_open(100, 20),
    ]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::Discontinuity {
            prev_max: 100,
            next_min: 100
        })
    );
}

#[test]
fn test_validate_rejects_nonzero_start() {
    let table = RangeTable::new(vec![FeeRange::flat_open(100, 10)]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::DoesNotStartAtZero { min: 100 })
    );
}

#[test]
fn test_validate_rejects_inverted_range() {
    let table = RangeTable::new(vec![
        FeeRange::flat(0, 4_999, 10),
        FeeRange::flat(5_000, 4_000, 20),
        FeeRange::flat_open(10_000, 30),
    ]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::InvertedRange {
            min: 5_000,
            max: 4_000
        })
    );
}

#[test]
fn test_validate_rejects_range_after_open_end() {
    let table = RangeTable::new(vec![
        FeeRange::flat_open(0, 10),
        FeeRange::flat_open(5_000, 20),
    ]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::RangeAfterOpenEnd { min: 5_000 })
    );
}

#[test]
fn test_validate_rejects_bounded_top() {
    let table = RangeTable::new(vec![FeeRange::flat(0, 4_999, 10)]);
    assert_eq!(
        table.validate(),
        Err(ScheduleError::BoundedTop { max: 4_999 })
    );
}
