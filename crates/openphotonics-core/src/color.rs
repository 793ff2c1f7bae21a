use serde::{Deserialize, Serialize};

/// An RGB fill color with each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray with the given level in [0, 1].
    pub fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }

    /// Quantize to 8-bit channels for rasterizers and SVG output.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Convert an HSL color to RGB.
///
/// `h_deg` is the hue angle in degrees (any value, wrapped onto the hue
/// circle); `s_pct` and `l_pct` are saturation and lightness as percentages
/// in 0–100. Zero saturation yields the achromatic gray `(l, l, l)`.
pub fn hsl_to_rgb(h_deg: f64, s_pct: f64, l_pct: f64) -> Rgb {
    let h = (h_deg / 360.0).rem_euclid(1.0);
    let s = s_pct / 100.0;
    let l = l_pct / 100.0;

    if s == 0.0 {
        return Rgb::gray(l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_channel(p: f64, q: f64, t: f64) -> f64 {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    Rgb::new(
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    )
}
