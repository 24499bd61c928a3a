// Host-side tests for the pure slider-value helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod value {
    include!("../src/value.rs");
}

use value::*;

#[test]
fn parses_plain_numbers() {
    assert_eq!(parse_slider_value("5"), 5.0);
    assert_eq!(parse_slider_value("0.0001"), 0.0001);
    assert_eq!(parse_slider_value(" 80 "), 80.0);
    assert_eq!(parse_slider_value("-3.5"), -3.5);
}

#[test]
fn non_numeric_input_becomes_nan() {
    assert!(parse_slider_value("").is_nan());
    assert!(parse_slider_value("abc").is_nan());
    assert!(parse_slider_value("1.2.3").is_nan());
}

#[test]
fn attributes_round_trip_the_definitions() {
    assert_eq!(format_attr(0.0001), "0.0001");
    assert_eq!(format_attr(0.05), "0.05");
    assert_eq!(format_attr(0.1), "0.1");
    assert_eq!(format_attr(1.0), "1");
    assert_eq!(format_attr(1000.0), "1000");
    // Display on f32 is shortest round-trip, so parsing the attribute gives
    // back the definition value exactly
    for v in [0.0001_f32, 0.05, 0.1, 1.0, 10.0, 80.0, 100.0, 1000.0] {
        assert_eq!(parse_slider_value(&format_attr(v)), v);
    }
}
