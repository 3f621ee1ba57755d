//! Per-syntax parsers and the fallthrough entry points.
//!
//! Each sub-parser is single-pass and stateless, returning `None` when the
//! input is not its syntax. `parse_color` tries them in `ColorSyntax::ALL`
//! order and only reports an error once every syntax has declined.

use std::sync::LazyLock;

use regex::Regex;

use super::number::{
    parse_alpha, parse_channel_255, parse_hue, parse_number, parse_percentage,
    parse_unit_interval,
};
use super::params::{ParamList, Separator, function_body};
use super::syntax::ColorSyntax;
use crate::error::ParseError;
use crate::model::{Hsl, Oklch, P3, Rgb};
use crate::value::ColorValue;

/// `#` followed by 3, 4, 6 or 8 hex digits.
static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex pattern is valid")
});

/// Parse any supported color syntax.
///
/// Leading and trailing whitespace is ignored. On failure the error carries
/// the input unmodified.
pub fn parse_color(input: &str) -> Result<ColorValue, ParseError> {
    let s = input.trim();
    for syntax in ColorSyntax::ALL {
        if let Some(value) = parse_syntax(syntax, s) {
            tracing::trace!("parsed {input:?} as {syntax}");
            return Ok(value);
        }
    }
    tracing::debug!("no color syntax matched {input:?}");
    Err(ParseError::Unsupported {
        input: input.to_string(),
    })
}

/// Parse with a caller-declared syntax, skipping the fallthrough chain.
pub fn parse_color_as(input: &str, syntax: ColorSyntax) -> Result<ColorValue, ParseError> {
    parse_syntax(syntax, input.trim()).ok_or_else(|| {
        tracing::debug!("{input:?} is not valid {syntax}");
        ParseError::SyntaxMismatch {
            syntax,
            input: input.to_string(),
        }
    })
}

fn parse_syntax(syntax: ColorSyntax, s: &str) -> Option<ColorValue> {
    match syntax {
        ColorSyntax::Oklch => parse_oklch(s).map(ColorValue::from_oklch),
        ColorSyntax::Hex => parse_hex(s).map(ColorValue::from_rgb),
        ColorSyntax::Rgb => parse_rgb(s).map(ColorValue::from_rgb),
        ColorSyntax::Hsl => parse_hsl(s).map(ColorValue::from_hsl),
        ColorSyntax::DisplayP3 => parse_display_p3(s).map(ColorValue::from_p3),
    }
}

/// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = HEX.captures(s)?.get(1)?.as_str();
    let channels: Vec<u8> = if digits.len() <= 4 {
        (0..digits.len())
            .map(|i| u8::from_str_radix(&digits[i..=i], 16).map(|nibble| nibble * 17))
            .collect::<Result<_, _>>()
            .ok()?
    } else {
        (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .ok()?
    };

    let alpha = channels.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Some(Rgb {
        r: f64::from(channels[0]),
        g: f64::from(channels[1]),
        b: f64::from(channels[2]),
        a: alpha,
    })
}

/// `rgb()` / `rgba()` with number or percentage channels.
pub fn parse_rgb(s: &str) -> Option<Rgb> {
    let body = function_body(s, &["rgb", "rgba"])?;
    let list = ParamList::split(body)?;
    let ([r, g, b], alpha) = list.channels()?;
    Some(Rgb {
        r: parse_channel_255(r)?,
        g: parse_channel_255(g)?,
        b: parse_channel_255(b)?,
        a: alpha.map_or(Some(1.0), parse_alpha)?,
    })
}

/// `hsl()` / `hsla()`: a hue angle and two percentages.
pub fn parse_hsl(s: &str) -> Option<Hsl> {
    let body = function_body(s, &["hsl", "hsla"])?;
    let list = ParamList::split(body)?;
    let ([h, sat, light], alpha) = list.channels()?;
    Some(Hsl {
        h: parse_hue(h)?,
        s: parse_percentage(sat)?,
        l: parse_percentage(light)?,
        a: alpha.map_or(Some(1.0), parse_alpha)?,
    })
}

/// `oklch(L C H [/ A])`, space-separated only.
///
/// `L` is a number or percentage clamped to `[0, 1]`; a negative `C` is
/// rejected.
pub fn parse_oklch(s: &str) -> Option<Oklch> {
    let body = function_body(s, &["oklch"])?;
    let list = ParamList::split(body)?;
    let [l, c, h] = space_separated::<3>(&list)?;

    let c = parse_number(c).filter(|c| *c >= 0.0)?;
    Some(Oklch {
        l: parse_unit_interval(l)?,
        c,
        h: parse_hue(h)?,
        a: list.alpha.map_or(Some(1.0), parse_alpha)?,
    })
}

/// `color(display-p3 R G B [/ A])` with bare, unclamped channel numbers.
pub fn parse_display_p3(s: &str) -> Option<P3> {
    let body = function_body(s, &["color"])?;
    let list = ParamList::split(body)?;
    let [space, r, g, b] = space_separated::<4>(&list)?;
    if !space.eq_ignore_ascii_case("display-p3") {
        return None;
    }
    Some(P3 {
        r: parse_number(r)?,
        g: parse_number(g)?,
        b: parse_number(b)?,
        a: list.alpha.map_or(Some(1.0), parse_alpha)?,
    })
}

/// Exactly `N` whitespace-separated positional tokens.
fn space_separated<'a, const N: usize>(list: &ParamList<'a>) -> Option<[&'a str; N]> {
    if list.separator != Separator::Space {
        return None;
    }
    list.values.as_slice().try_into().ok()
}
