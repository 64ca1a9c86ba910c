// Host-side tests for badge and form text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod labels {
    include!("../src/labels.rs");
}

use labels::*;
use mosquito_core::{AudioSettings, WaveType};

#[test]
fn badges_read_like_the_status_card() {
    assert_eq!(distance_label(150), "Distance: 150px");
    assert_eq!(frequency_label(600), "Frequency: 600 Hz");
    assert_eq!(buzz_label(true), "Buzzing Active");
    assert_eq!(buzz_label(false), "No Buzz");
}

#[test]
fn range_preview_lists_bounds_and_wave() {
    assert_eq!(
        range_preview(200, 1000, "sine"),
        "Current range: 200Hz - 1000Hz • Waveform: sine"
    );
}

#[test]
fn hz_field_falls_back_on_blank_garbage_or_zero() {
    assert_eq!(parse_hz_field("440", 200), 440);
    assert_eq!(parse_hz_field(" 1500 ", 1000), 1500);
    assert_eq!(parse_hz_field("", 200), 200);
    assert_eq!(parse_hz_field("abc", 1000), 1000);
    assert_eq!(parse_hz_field("0", 200), 200);
    assert_eq!(parse_hz_field("-0", 200), 200);
}

#[test]
fn hz_field_reads_the_leading_integer() {
    assert_eq!(parse_hz_field("1500.7", 1000), 1500);
    assert_eq!(parse_hz_field("440hz", 200), 440);
    assert_eq!(parse_hz_field("+300", 200), 300);
}

#[test]
fn negative_hz_field_is_kept_and_rejected_on_save() {
    let min = parse_hz_field("-40", 200);
    assert_eq!(min, -40);
    let err = AudioSettings::from_fields(min, 1000, WaveType::Sine).unwrap_err();
    assert_eq!(err.to_string(), "Frequencies must be between 50Hz and 2000Hz");
    assert_eq!(err.title(), "Invalid Range");
}

#[test]
fn oversized_field_saturates_and_fails_validation_later() {
    let max = parse_hz_field("99999999999999999999999", 200);
    assert_eq!(max, i64::MAX);
    assert!(AudioSettings::from_fields(200, max, WaveType::Sine).is_err());
}

#[test]
fn marker_is_centred_and_scaled_in_zone() {
    assert_eq!(mosquito_marker_style(100.0, 50.0, false, 8.0, 1.2), (92.0, 42.0, 1.0));
    assert_eq!(mosquito_marker_style(100.0, 50.0, true, 8.0, 1.2), (92.0, 42.0, 1.2));
}
