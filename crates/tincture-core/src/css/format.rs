//! CSS text and hex serialization.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::model::{Hsl, Oklch, P3, Rgb, clamp01};

/// Default maximum number of fractional digits in CSS output.
const DEFAULT_PRECISION: usize = 4;

/// Output settings for CSS serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Maximum fractional digits per number. Trailing zeros are trimmed.
    pub precision: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Render `value` with at most `precision` fractional digits, then strip
/// trailing zeros and a dangling decimal point.
///
/// `0.50000` → `"0.5"`, `70.0` → `"70"`, `-0.00001` → `"0"`.
pub fn trim_float(value: f64, precision: usize) -> String {
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Append ` / alpha` unless the clamped alpha is fully opaque.
fn push_alpha(out: &mut String, alpha: f64, config: &FormatConfig) {
    let a = clamp01(alpha);
    if a < 1.0 {
        let _ = write!(out, " / {}", trim_float(a, config.precision));
    }
}

/// `rgb(R G B[ / A])` with channels clamped to `[0, 255]` and rounded.
pub fn rgb_to_css(rgb: &Rgb, config: &FormatConfig) -> String {
    let [r, g, b] = [rgb.r, rgb.g, rgb.b].map(|c| trim_float(c.clamp(0.0, 255.0).round(), 0));
    let mut out = format!("rgb({r} {g} {b}");
    push_alpha(&mut out, rgb.a, config);
    out.push(')');
    out
}

/// `hsl(H S% L%[ / A])`.
pub fn hsl_to_css(hsl: &Hsl, config: &FormatConfig) -> String {
    let p = config.precision;
    let mut out = format!(
        "hsl({} {}% {}%",
        trim_float(hsl.h, p),
        trim_float(hsl.s, p),
        trim_float(hsl.l, p)
    );
    push_alpha(&mut out, hsl.a, config);
    out.push(')');
    out
}

/// `oklch(L% C H[ / A])` with lightness rendered as a percentage.
pub fn oklch_to_css(lch: &Oklch, config: &FormatConfig) -> String {
    let p = config.precision;
    let mut out = format!(
        "oklch({}% {} {}",
        trim_float(lch.l * 100.0, p),
        trim_float(lch.c, p),
        trim_float(lch.h, p)
    );
    push_alpha(&mut out, lch.a, config);
    out.push(')');
    out
}

/// `color(display-p3 R G B[ / A])`.
pub fn p3_to_css(p3: &P3, config: &FormatConfig) -> String {
    let p = config.precision;
    let mut out = format!(
        "color(display-p3 {} {} {}",
        trim_float(p3.r, p),
        trim_float(p3.g, p),
        trim_float(p3.b, p)
    );
    push_alpha(&mut out, p3.a, config);
    out.push(')');
    out
}

/// `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1. Uppercase digits.
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    let byte = |c: f64| c.clamp(0.0, 255.0).round() as u8;
    let mut out = format!("#{:02X}{:02X}{:02X}", byte(rgb.r), byte(rgb.g), byte(rgb.b));
    if rgb.a < 1.0 {
        let _ = write!(out, "{:02X}", byte(rgb.a * 255.0));
    }
    out
}
