//! Input syntaxes recognized by the parser and output notations used by the
//! formatter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A textual color syntax accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSyntax {
    /// `oklch(L C H [/ A])`.
    Oklch,
    /// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    Hex,
    /// `rgb()` / `rgba()`.
    Rgb,
    /// `hsl()` / `hsla()`.
    Hsl,
    /// `color(display-p3 R G B [/ A])`.
    DisplayP3,
}

impl ColorSyntax {
    /// Every syntax in the order `parse_color` attempts them.
    pub const ALL: [ColorSyntax; 5] = [
        ColorSyntax::Oklch,
        ColorSyntax::Hex,
        ColorSyntax::Rgb,
        ColorSyntax::Hsl,
        ColorSyntax::DisplayP3,
    ];

    /// Human-readable label for diagnostics.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Oklch => "oklch()",
            Self::Hex => "hex",
            Self::Rgb => "rgb()",
            Self::Hsl => "hsl()",
            Self::DisplayP3 => "color(display-p3)",
        }
    }

    /// The notation a color parsed from this syntax is rendered back in.
    ///
    /// Hex input renders as `rgb()`.
    pub const fn preferred_format(self) -> CssFormat {
        match self {
            Self::Oklch => CssFormat::Oklch,
            Self::Hex | Self::Rgb => CssFormat::Rgb,
            Self::Hsl => CssFormat::Hsl,
            Self::DisplayP3 => CssFormat::DisplayP3,
        }
    }
}

impl fmt::Display for ColorSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The CSS notation a `ColorValue` renders itself in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFormat {
    /// `rgb(R G B [/ A])`.
    Rgb,
    /// `hsl(H S% L% [/ A])`.
    Hsl,
    /// `oklch(L% C H [/ A])`.
    Oklch,
    /// `color(display-p3 R G B [/ A])`.
    DisplayP3,
}

impl CssFormat {
    /// Human-readable label for diagnostics.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
            Self::DisplayP3 => "display-p3",
        }
    }
}

impl fmt::Display for CssFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
