//! Tincture Core — CSS color parsing, formatting, and conversion.
//!
//! Parses hex, `rgb()`, `hsl()`, `oklch()` and `color(display-p3 ...)` into a
//! [`ColorValue`] that converts lazily between sRGB, HSL, Oklab/Oklch and
//! Display-P3, and renders back to CSS text in the notation it came from.
//!
//! ```
//! use tincture_core::parse_color;
//!
//! let color = parse_color("oklch(70% 0.1 30)").unwrap();
//! assert_eq!(color.to_css(), "oklch(70% 0.1 30)");
//! assert!(color.to_hex().starts_with('#'));
//! ```

pub mod color_management;
pub mod css;
pub mod error;
pub mod model;
pub mod value;

// Re-exports for convenience.
pub use css::{ColorSyntax, CssFormat, FormatConfig, parse_color, parse_color_as};
pub use error::ParseError;
pub use model::{Hsl, Oklab, Oklch, P3, Rgb};
pub use value::ColorValue;
