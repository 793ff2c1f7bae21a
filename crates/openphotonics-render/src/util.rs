use openphotonics_core::color::Rgb;

/// Format a coordinate with up to 3 decimals, trimming trailing zeros.
pub(crate) fn fmt(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// CSS hex color from unit-range RGB channels.
pub(crate) fn hex(color: Rgb) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}
