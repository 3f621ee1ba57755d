//! Functional-notation scaffolding: function name matching and parameter
//! list tokenizing.
//!
//! ```text
//! name(  p0 p1 p2 / alpha  )     space-separated, slash alpha
//! name(  p0, p1, p2 / alpha )    comma-separated, slash alpha
//! name(  p0, p1, p2, alpha )     legacy comma alpha
//! ```

/// How the positional parameters were separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Space,
}

/// A tokenized parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamList<'a> {
    /// Positional tokens, trimmed and non-empty.
    pub values: Vec<&'a str>,
    /// The token after `/`, if present.
    pub alpha: Option<&'a str>,
    /// Separator used between positional tokens.
    pub separator: Separator,
}

impl<'a> ParamList<'a> {
    /// Split a parameter body into positional tokens and an optional alpha.
    ///
    /// Returns `None` for an empty body, more than one `/`, an empty alpha
    /// segment, or an empty comma-separated slot.
    pub fn split(body: &'a str) -> Option<Self> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let (left, alpha) = match body.split_once('/') {
            Some((left, alpha)) => {
                let alpha = alpha.trim();
                if alpha.is_empty() || alpha.contains('/') {
                    return None;
                }
                (left.trim(), Some(alpha))
            }
            None => (body, None),
        };

        let (values, separator) = if left.contains(',') {
            let values: Vec<&str> = left.split(',').map(str::trim).collect();
            if values.iter().any(|v| v.is_empty()) {
                return None;
            }
            (values, Separator::Comma)
        } else {
            (left.split_whitespace().collect(), Separator::Space)
        };

        Some(Self {
            values,
            alpha,
            separator,
        })
    }

    /// Resolve the three positional channels and the alpha token.
    ///
    /// Accepts exactly three positional values, plus a fourth only in the
    /// legacy comma form without a `/` segment.
    pub fn channels(&self) -> Option<([&'a str; 3], Option<&'a str>)> {
        match (self.values.as_slice(), self.alpha, self.separator) {
            ([c0, c1, c2], alpha, _) => Some(([*c0, *c1, *c2], alpha)),
            ([c0, c1, c2, a], None, Separator::Comma) => Some(([*c0, *c1, *c2], Some(*a))),
            _ => None,
        }
    }
}

/// Match `name(body)` case-insensitively against any of `names` and return
/// the body between the parentheses.
///
/// The name must be immediately followed by `(` and the input must end
/// with `)`.
pub fn function_body<'a>(input: &'a str, names: &[&str]) -> Option<&'a str> {
    let open = input.find('(')?;
    let name = &input[..open];
    if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        return None;
    }
    input[open + 1..].strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated_with_slash_alpha() {
        let list = ParamList::split(" 1 2   3 / 50% ").unwrap();
        assert_eq!(list.values, vec!["1", "2", "3"]);
        assert_eq!(list.alpha, Some("50%"));
        assert_eq!(list.separator, Separator::Space);
    }

    #[test]
    fn test_comma_separated_legacy_alpha() {
        let list = ParamList::split("0, 0, 0, 0.5").unwrap();
        assert_eq!(list.separator, Separator::Comma);
        let (channels, alpha) = list.channels().unwrap();
        assert_eq!(channels, ["0", "0", "0"]);
        assert_eq!(alpha, Some("0.5"));
    }

    #[test]
    fn test_space_separated_fourth_value_is_rejected() {
        let list = ParamList::split("1 2 3 4").unwrap();
        assert!(list.channels().is_none());
    }

    #[test]
    fn test_comma_fourth_value_with_slash_is_rejected() {
        let list = ParamList::split("1, 2, 3, 4 / 0.5").unwrap();
        assert!(list.channels().is_none());
    }

    #[test]
    fn test_too_few_values_are_rejected() {
        let list = ParamList::split("1,2").unwrap();
        assert!(list.channels().is_none());
    }

    #[test]
    fn test_malformed_bodies_are_rejected() {
        assert!(ParamList::split("   ").is_none());
        assert!(ParamList::split("1 2 3 /").is_none());
        assert!(ParamList::split("1 2 3 / 4 / 5").is_none());
        assert!(ParamList::split("1,,2,3").is_none());
    }

    #[test]
    fn test_function_body_is_case_insensitive() {
        assert_eq!(function_body("RGBA(1,2,3)", &["rgb", "rgba"]), Some("1,2,3"));
        assert_eq!(function_body("rgb()", &["rgb"]), Some(""));
        assert_eq!(function_body("rgb (1 2 3)", &["rgb"]), None);
        assert_eq!(function_body("rgb(1 2 3", &["rgb"]), None);
        assert_eq!(function_body("hsl(1 2 3)", &["rgb"]), None);
    }
}
