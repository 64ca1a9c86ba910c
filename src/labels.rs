// Text shown in the status badges and form messages. Kept free of web-sys so
// it can be exercised on the host.

#[inline]
pub fn distance_label(distance_px: u32) -> String {
    format!("Distance: {}px", distance_px)
}

#[inline]
pub fn frequency_label(frequency_hz: u32) -> String {
    format!("Frequency: {} Hz", frequency_hz)
}

#[inline]
pub fn buzz_label(is_playing: bool) -> &'static str {
    if is_playing {
        "Buzzing Active"
    } else {
        "No Buzz"
    }
}

pub fn range_preview(min_hz: i64, max_hz: i64, wave: &str) -> String {
    format!("Current range: {}Hz - {}Hz • Waveform: {}", min_hz, max_hz, wave)
}

/// Parse the leading integer of a numeric form field (`"1500.7"` reads as
/// 1500). Blank, non-numeric and zero input fall back to `default`; negative
/// values are kept so validation can reject them.
pub fn parse_hz_field(raw: &str, default: u32) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if value == 0 {
        i64::from(default)
    } else {
        sign * value
    }
}

/// `(left, top, scale)` style values for the pointer marker.
pub fn mosquito_marker_style(
    x: f32,
    y: f32,
    in_zone: bool,
    half_size: f32,
    zone_scale: f32,
) -> (f32, f32, f32) {
    let scale = if in_zone { zone_scale } else { 1.0 };
    (x - half_size, y - half_size, scale)
}
