//! CSS color grammar: parsing the supported syntaxes and formatting values
//! back to CSS text.

pub mod format;
pub mod number;
pub mod params;
pub mod parse;
pub mod syntax;

pub use format::FormatConfig;
pub use parse::{parse_color, parse_color_as};
pub use syntax::{ColorSyntax, CssFormat};
