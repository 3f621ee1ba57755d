//! Display-P3 ↔ sRGB conversions.
//!
//! Both spaces use the sRGB transfer curve and a D65 white point, so the
//! conversion is decode → 3x3 primaries matrix → encode.

use super::color_space::{LINEAR_P3_TO_LINEAR_SRGB, LINEAR_SRGB_TO_LINEAR_P3};
use super::transfer;
use crate::model::{P3, Rgb, clamp01};

/// Convert Display-P3 to 8-bit scaled sRGB.
///
/// P3 colors outside the sRGB gamut are clamped to the sRGB boundary per
/// channel. Alpha passes through unchanged.
pub fn p3_to_rgb(p3: &P3) -> Rgb {
    let linear_p3 = transfer::to_linear_rgb([p3.r, p3.g, p3.b]);
    let linear = LINEAR_P3_TO_LINEAR_SRGB.apply(linear_p3);
    let [r, g, b] = transfer::to_encoded_rgb(linear).map(|c| clamp01(c) * 255.0);
    Rgb { r, g, b, a: p3.a }
}

/// Convert 8-bit scaled sRGB to Display-P3.
///
/// Output channels are nominally in `[0, 1]` and left unclamped. The
/// rounded primaries matrix can overshoot slightly for saturated sRGB input.
pub fn rgb_to_p3(rgb: &Rgb) -> P3 {
    let linear = transfer::to_linear_rgb([rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0]);
    let linear_p3 = LINEAR_SRGB_TO_LINEAR_P3.apply(linear);
    let [r, g, b] = transfer::to_encoded_rgb(linear_p3);
    P3 { r, g, b, a: rgb.a }
}
