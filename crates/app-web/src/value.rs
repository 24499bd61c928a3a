// Pure helpers for slider attribute formatting and input parsing.
// Kept free of web-sys so the host-side tests can include them directly.

/// Parse a range input's raw string. Non-numeric input propagates silently
/// as NaN; no validation or error signaling exists by design.
pub fn parse_slider_value(raw: &str) -> f32 {
    raw.trim().parse::<f32>().unwrap_or(f32::NAN)
}

/// Format a definition number for a min/max/step/value attribute. `Display`
/// on f32 is the shortest round-trip form, so the attribute matches the
/// definition exactly.
pub fn format_attr(v: f32) -> String {
    format!("{v}")
}
