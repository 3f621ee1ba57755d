//! sRGB ↔ Oklab ↔ Oklch conversions.
//!
//! # Reference
//! Björn Ottosson, "A perceptual color space for image processing" (2020)
//!
//! ```text
//! sRGB ──→ linear ──→ ×M1 ──→ LMS ──→ ∛ ──→ ×M2 ──→ Oklab ──→ polar ──→ Oklch
//! ```

use std::f64::consts::PI;

use super::color_space::{LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS};
use super::transfer;
use crate::model::{Oklab, Oklch, Rgb, clamp01, wrap_degrees};

/// Chroma below which hue is meaningless and forced to zero.
const ACHROMATIC_CHROMA: f64 = 1e-12;

/// Convert 8-bit scaled sRGB to Oklab.
///
/// Channels are normalized and clamped to `[0, 1]` before decoding. Alpha is
/// not part of Oklab and is ignored.
pub fn rgb_to_oklab(rgb: &Rgb) -> Oklab {
    let encoded = [rgb.r, rgb.g, rgb.b].map(|c| clamp01(c / 255.0));
    let lms = LINEAR_SRGB_TO_LMS.apply(transfer::to_linear_rgb(encoded));
    let [l, a, b] = LMS_TO_OKLAB.apply(lms.map(f64::cbrt));
    Oklab { l, a, b }
}

/// Convert Oklab back to 8-bit scaled sRGB.
///
/// Out-of-gamut results are clamped per channel. `alpha` is clamped to
/// `[0, 1]` and passed through.
pub fn oklab_to_rgb(lab: &Oklab, alpha: f64) -> Rgb {
    let lms_ = OKLAB_TO_LMS.apply([lab.l, lab.a, lab.b]);
    let lms = lms_.map(|v| v * v * v);
    let linear = LMS_TO_LINEAR_SRGB.apply(lms);
    let [r, g, b] = transfer::to_encoded_rgb(linear).map(|c| clamp01(c) * 255.0);
    Rgb {
        r,
        g,
        b,
        a: clamp01(alpha),
    }
}

/// Convert Oklab to its polar form.
///
/// Hue is in degrees, normalized to `[0, 360)`. Near-gray colors get hue 0
/// instead of `atan2` noise.
pub fn oklab_to_oklch(lab: &Oklab, alpha: f64) -> Oklch {
    let c = lab.a.hypot(lab.b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        wrap_degrees(lab.b.atan2(lab.a).to_degrees())
    };
    Oklch {
        l: lab.l,
        c,
        h,
        a: clamp01(alpha),
    }
}

/// Convert Oklch to Oklab. Alpha is dropped.
pub fn oklch_to_oklab(lch: &Oklch) -> Oklab {
    let hr = (lch.h * PI) / 180.0;
    Oklab {
        l: lch.l,
        a: lch.c * hr.cos(),
        b: lch.c * hr.sin(),
    }
}

/// Convenience: 8-bit sRGB straight to Oklch, carrying alpha.
pub fn rgb_to_oklch(rgb: &Rgb) -> Oklch {
    oklab_to_oklch(&rgb_to_oklab(rgb), rgb.a)
}

/// Convenience: Oklch straight to 8-bit sRGB, carrying alpha.
pub fn oklch_to_rgb(lch: &Oklch) -> Rgb {
    oklab_to_rgb(&oklch_to_oklab(lch), lch.a)
}
