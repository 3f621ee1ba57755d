//! Color value records for each supported color space.
//!
//! All records are plain `Copy` values. Channel ranges are nominal: the
//! transforms tolerate out-of-range input and clamp only where noted.

use serde::{Deserialize, Serialize};

/// Gamma-encoded sRGB with 8-bit scaled channels.
///
/// `r`, `g`, `b` are nominally in `[0, 255]` but stay unclamped floats until
/// output. `a` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel, 0–255.
    pub r: f64,
    /// Green channel, 0–255.
    pub g: f64,
    /// Blue channel, 0–255.
    pub b: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

impl Rgb {
    /// Create an RGB value from channels and alpha.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque RGB value.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// Hue / saturation / lightness.
///
/// `h` in degrees `[0, 360)`, `s` and `l` in percent `[0, 100]`, `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

impl Hsl {
    /// Create an HSL value.
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

/// Oklab perceptual color. Carries no alpha; callers pass it alongside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    /// Perceptual lightness, nominally 0–1.
    pub l: f64,
    /// Green–red axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
}

impl Oklab {
    /// Create an Oklab value.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// Polar form of Oklab.
///
/// `l` in `[0, 1]`, `c >= 0`, `h` in degrees `[0, 360)`, `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Perceptual lightness.
    pub l: f64,
    /// Chroma.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

impl Oklch {
    /// Create an Oklch value.
    pub const fn new(l: f64, c: f64, h: f64, a: f64) -> Self {
        Self { l, c, h, a }
    }
}

/// Display-P3 with gamma-encoded channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct P3 {
    /// Red channel, 0–1.
    pub r: f64,
    /// Green channel, 0–1.
    pub g: f64,
    /// Blue channel, 0–1.
    pub b: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

impl P3 {
    /// Create a Display-P3 value.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Clamp a value into `[0, 1]`.
pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Floored modulo into `[0, 360)`.
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_opaque_sets_full_alpha() {
        let rgb = Rgb::opaque(10.0, 20.0, 30.0);
        assert_eq!(rgb, Rgb::new(10.0, 20.0, 30.0, 1.0));
    }

    #[test]
    fn test_wrap_degrees_never_returns_360() {
        assert_eq!(wrap_degrees(-1e-20), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
    }

    #[test]
    fn test_clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(3.0), 1.0);
    }

    #[test]
    fn test_oklch_serializes_field_names() {
        let json = serde_json::to_string(&Oklch::new(0.5, 0.1, 30.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"l":0.5,"c":0.1,"h":30.0,"a":1.0}"#);
    }
}
