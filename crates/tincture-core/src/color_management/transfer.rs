//! sRGB transfer function (IEC 61966-2-1).
//!
//! Converts between gamma-encoded and linear-light channel values. Display-P3
//! shares this curve, so the P3 transform reuses these functions.
//!
//! ```text
//! to_linear:  V <= 0.04045   → V / 12.92
//!             V >  0.04045   → ((V + 0.055) / 1.055) ^ 2.4
//!
//! to_encoded: L <= 0.0031308 → L × 12.92
//!             L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
//! ```
//!
//! Both functions are total: values outside `[0, 1]` are extrapolated along
//! the same formula rather than rejected.

/// Decode a gamma-encoded channel to linear light.
#[inline]
pub fn to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light channel with the sRGB curve.
#[inline]
pub fn to_encoded(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode an RGB triplet to linear light.
#[inline]
pub fn to_linear_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(to_linear)
}

/// Encode a linear RGB triplet.
#[inline]
pub fn to_encoded_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(to_encoded)
}
