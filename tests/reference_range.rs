mod fixtures;

use fixtures::{assert_matches_reference, load_reference_frame};
use volatility_metrics::{normalized_range, rolling_range_over_price};

/// Ratios of ~1e-2 from prices with two decimals.
const TOLERANCE: f64 = 1e-12;

#[test]
fn normalized_range_matches_reference() {
    let frame = load_reference_frame();
    let nr = normalized_range(frame.high(), frame.low(), frame.close()).unwrap();

    assert_matches_reference(
        &nr,
        "tests/fixtures/data/normalized-range.csv",
        TOLERANCE,
        "normalized range",
    );
}

#[test]
fn range_over_price_14_matches_reference() {
    let frame = load_reference_frame();
    let rop = rolling_range_over_price(frame.high(), frame.low(), frame.close(), 14).unwrap();

    assert_matches_reference(
        &rop,
        "tests/fixtures/data/range-over-price-14.csv",
        TOLERANCE,
        "range over price(14)",
    );
}
