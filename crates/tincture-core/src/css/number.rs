//! Numeric parameter parsers.
//!
//! Every parser returns `None` on malformed or non-finite input so the caller
//! can fall through to the next syntax. Tokens are trimmed once; a unit or
//! `%` must follow the number directly.

use std::f64::consts::PI;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{clamp01, wrap_degrees};

/// A CSS `<number>` with an optional `%` suffix: optional sign, digits with
/// an optional fraction, optional exponent.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)(%)?$")
        .expect("numeric pattern is valid")
});

/// A signed decimal hue with an optional angle unit.
static HUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d+|\d*\.\d+))(deg|rad|grad|turn)?$")
        .expect("hue pattern is valid")
});

/// Split a token into its number and whether it carried a `%` suffix.
fn numeric(token: &str) -> Option<(f64, bool)> {
    let caps = NUMERIC.captures(token.trim())?;
    let value: f64 = caps[1].parse().ok()?;
    value.is_finite().then_some((value, caps.get(2).is_some()))
}

/// Parse a CSS `<number>`. Rejects `inf`, `NaN`, hex, percentages and empty
/// input.
pub fn parse_number(token: &str) -> Option<f64> {
    match numeric(token)? {
        (value, false) => Some(value),
        (_, true) => None,
    }
}

/// Parse a `<percentage>` token (`%` required) and return its numeric value,
/// unclamped. `"50%"` → `50.0`.
pub fn parse_percentage(token: &str) -> Option<f64> {
    match numeric(token)? {
        (value, true) => Some(value),
        (_, false) => None,
    }
}

/// Parse an RGB channel: a bare number taken as-is, or a percentage mapped
/// onto `[0, 255]`. Not clamped.
pub fn parse_channel_255(token: &str) -> Option<f64> {
    let value = match numeric(token)? {
        (pct, true) => pct / 100.0 * 255.0,
        (value, false) => value,
    };
    value.is_finite().then_some(value)
}

/// Parse an alpha value: a bare number or a percentage, clamped to `[0, 1]`.
pub fn parse_alpha(token: &str) -> Option<f64> {
    parse_unit_interval(token)
}

/// Parse a number or percentage into `[0, 1]` (percentage divided by 100),
/// clamped.
pub fn parse_unit_interval(token: &str) -> Option<f64> {
    let value = match numeric(token)? {
        (pct, true) => pct / 100.0,
        (value, false) => value,
    };
    Some(clamp01(value))
}

/// Angle units accepted after a hue value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Deg,
    Rad,
    Grad,
    Turn,
}

impl AngleUnit {
    /// Convert a value in this unit to degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            Self::Deg => value,
            Self::Rad => value * (180.0 / PI),
            Self::Grad => value * 0.9,
            Self::Turn => value * 360.0,
        }
    }

    /// Look up a unit suffix, case-insensitively.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            "grad" => Some(Self::Grad),
            "turn" => Some(Self::Turn),
            _ => None,
        }
    }
}

/// Parse a hue: a signed decimal with an optional `deg`/`rad`/`grad`/`turn`
/// suffix (degrees by default), converted to degrees and wrapped into
/// `[0, 360)`.
pub fn parse_hue(token: &str) -> Option<f64> {
    let caps = HUE.captures(token.trim())?;
    let value: f64 = caps[1].parse().ok()?;
    let unit = match caps.get(2) {
        Some(suffix) => AngleUnit::from_suffix(suffix.as_str())?,
        None => AngleUnit::Deg,
    };
    let degrees = unit.to_degrees(value);
    degrees.is_finite().then(|| wrap_degrees(degrees))
}
