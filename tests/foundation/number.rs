//! Integration tests for numeric text helpers
//!
//! Tests decimal and hex parsing plus precise formatting.

use reckon_foundation::{format_precise, parse_number};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_decimal() {
    assert_eq!(parse_number("42"), Some(42.0));
    assert_eq!(parse_number("1.5"), Some(1.5));
    assert_eq!(parse_number("-3.25"), Some(-3.25));
}

#[test]
fn parse_hex() {
    assert_eq!(parse_number("0x0A"), Some(10.0));
    assert_eq!(parse_number("0XFF"), Some(255.0));
    assert_eq!(parse_number("-0x0F"), Some(-15.0));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("0x"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("1.2.3"), None);
}

#[test]
fn parse_rejects_non_finite() {
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn format_integral_values_have_no_fraction() {
    assert_eq!(format_precise(2.0), "2");
    assert_eq!(format_precise(-10.0), "-10");
}

#[test]
fn format_round_trips_through_parse() {
    for value in [0.1, 1.5, std::f64::consts::PI, 1e300, -2.5e-7] {
        let text = format_precise(value);
        assert_eq!(parse_number(&text), Some(value), "for {value}");
    }
}
