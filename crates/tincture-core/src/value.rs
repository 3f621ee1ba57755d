//! Lazily materialized multi-representation color value.
//!
//! A `ColorValue` is built from one native representation. Every other
//! representation is derived through the transforms the first time it is
//! requested and cached for the value's lifetime, so derived forms are always
//! consistent with the native one.
//!
//! ```text
//!            ┌──→ Oklch
//!  native ──→ RGB ──→ HSL
//!            └──→ P3
//! ```
//!
//! RGB is the hub: non-RGB natives derive RGB first, then every other form
//! derives from RGB.
//!
//! # Concurrency
//! Each slot is a `OnceLock`. Concurrent first accesses initialize a slot
//! exactly once; since every derivation is pure, all readers observe the same
//! value.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::color_management::{hsl, oklab, p3};
use crate::css::{CssFormat, FormatConfig, format};
use crate::error::ParseError;
use crate::model::{Hsl, Oklab, Oklch, P3, Rgb};

/// A parsed or constructed color with cached conversions.
#[derive(Debug, Clone)]
pub struct ColorValue {
    rgb: OnceLock<Rgb>,
    oklch: OnceLock<Oklch>,
    hsl: OnceLock<Hsl>,
    p3: OnceLock<P3>,
    preferred: CssFormat,
}

impl ColorValue {
    fn empty(preferred: CssFormat) -> Self {
        Self {
            rgb: OnceLock::new(),
            oklch: OnceLock::new(),
            hsl: OnceLock::new(),
            p3: OnceLock::new(),
            preferred,
        }
    }

    /// Wrap an sRGB value. Renders as `rgb()`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let value = Self::empty(CssFormat::Rgb);
        let _ = value.rgb.set(rgb);
        value
    }

    /// Wrap an HSL value. Renders as `hsl()`.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let value = Self::empty(CssFormat::Hsl);
        let _ = value.hsl.set(hsl);
        value
    }

    /// Wrap an Oklch value. Renders as `oklch()`.
    pub fn from_oklch(oklch: Oklch) -> Self {
        let value = Self::empty(CssFormat::Oklch);
        let _ = value.oklch.set(oklch);
        value
    }

    /// Wrap a Display-P3 value. Renders as `color(display-p3 ...)`.
    pub fn from_p3(p3: P3) -> Self {
        let value = Self::empty(CssFormat::DisplayP3);
        let _ = value.p3.set(p3);
        value
    }

    /// The notation `to_css` renders in.
    pub fn preferred_format(&self) -> CssFormat {
        self.preferred
    }

    /// sRGB with channels in `[0, 255]` and alpha in `[0, 1]`.
    pub fn to_rgb(&self) -> Rgb {
        *self.rgb.get_or_init(|| self.derive_rgb())
    }

    /// Oklch with hue in degrees `[0, 360)`.
    pub fn to_oklch(&self) -> Oklch {
        *self.oklch.get_or_init(|| {
            tracing::trace!("deriving oklch from rgb");
            oklab::rgb_to_oklch(&self.to_rgb())
        })
    }

    /// Oklab, computed from the (cached) Oklch form.
    pub fn to_oklab(&self) -> Oklab {
        oklab::oklch_to_oklab(&self.to_oklch())
    }

    /// HSL with saturation and lightness in percent.
    pub fn to_hsl(&self) -> Hsl {
        *self.hsl.get_or_init(|| {
            tracing::trace!("deriving hsl from rgb");
            hsl::rgb_to_hsl(&self.to_rgb())
        })
    }

    /// Display-P3 with channels nominally in `[0, 1]`.
    pub fn to_p3(&self) -> P3 {
        *self.p3.get_or_init(|| {
            tracing::trace!("deriving display-p3 from rgb");
            p3::rgb_to_p3(&self.to_rgb())
        })
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1.
    pub fn to_hex(&self) -> String {
        format::rgb_to_hex(&self.to_rgb())
    }

    /// CSS text in the preferred notation with default settings.
    pub fn to_css(&self) -> String {
        self.to_css_with(&FormatConfig::default())
    }

    /// CSS text in the preferred notation.
    pub fn to_css_with(&self, config: &FormatConfig) -> String {
        match self.preferred {
            CssFormat::Rgb => format::rgb_to_css(&self.to_rgb(), config),
            CssFormat::Hsl => format::hsl_to_css(&self.to_hsl(), config),
            CssFormat::Oklch => format::oklch_to_css(&self.to_oklch(), config),
            CssFormat::DisplayP3 => format::p3_to_css(&self.to_p3(), config),
        }
    }

    /// Derive RGB from whichever non-RGB representation was supplied.
    ///
    /// Non-RGB slots are only ever filled at construction or from RGB, so
    /// when RGB is missing the filled slot is the native one.
    fn derive_rgb(&self) -> Rgb {
        if let Some(lch) = self.oklch.get() {
            tracing::trace!("deriving rgb from oklch");
            oklab::oklch_to_rgb(lch)
        } else if let Some(native) = self.hsl.get() {
            tracing::trace!("deriving rgb from hsl");
            hsl::hsl_to_rgb(native)
        } else if let Some(native) = self.p3.get() {
            tracing::trace!("deriving rgb from display-p3");
            p3::p3_to_rgb(native)
        } else {
            unreachable!("ColorValue constructed without any representation")
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl From<Oklch> for ColorValue {
    fn from(oklch: Oklch) -> Self {
        Self::from_oklch(oklch)
    }
}

impl From<P3> for ColorValue {
    fn from(p3: P3) -> Self {
        Self::from_p3(p3)
    }
}

impl FromStr for ColorValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::css::parse_color(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
