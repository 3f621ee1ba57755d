//! sRGB ↔ HSL conversions (CSS Color 4 hue/saturation/lightness).

use crate::model::{Hsl, Rgb, clamp01, wrap_degrees};

/// Convert 8-bit scaled sRGB to HSL.
///
/// Hue uses the six-sector formula keyed on the maximal channel and is
/// normalized to `[0, 360)`. Achromatic input gets hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let mut h = 0.0;
    if delta != 0.0 {
        h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h = wrap_degrees(h * 60.0);
    }

    Hsl {
        h,
        s: s * 100.0,
        l: l * 100.0,
        a: rgb.a,
    }
}

/// Convert HSL to 8-bit scaled sRGB.
///
/// Channels are rounded to the nearest integer; alpha is clamped to `[0, 1]`.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: (r * 255.0).round(),
        g: (g * 255.0).round(),
        b: (b * 255.0).round(),
        a: clamp01(hsl.a),
    }
}

/// Sample one channel from the `p`/`q` anchors at hue position `t` (in turns).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
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
