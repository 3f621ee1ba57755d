use crate::css::ColorSyntax;

/// Failure to turn text into a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No supported syntax matched. Carries the input exactly as given.
    #[error("unsupported color format: {input}")]
    Unsupported { input: String },
    /// The caller-declared syntax did not match.
    #[error("not a valid {syntax} color: {input}")]
    SyntaxMismatch { syntax: ColorSyntax, input: String },
}

impl ParseError {
    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Unsupported { input } | Self::SyntaxMismatch { input, .. } => input,
        }
    }
}
