use serde::{Deserialize, Serialize};
use std::fmt;

/// Which public token failed to parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParseErrorKind {
    Variant,
    Size,
    Margin,
    Color,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Variant => write!(f, "variant"),
            ParseErrorKind::Size => write!(f, "size"),
            ParseErrorKind::Margin => write!(f, "margin"),
            ParseErrorKind::Color => write!(f, "color"),
        }
    }
}

/// A prop value that arrived as a string and did not name a known token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Tokens accepted for this kind, in declaration order.
    pub fn expected(&self) -> &'static [&'static str] {
        match self.kind {
            ParseErrorKind::Variant => &["filled", "outlined", "standard"],
            ParseErrorKind::Size => &["medium", "small"],
            ParseErrorKind::Margin => &["dense"],
            ParseErrorKind::Color => &[
                "error",
                "info",
                "primary",
                "secondary",
                "success",
                "warning",
            ],
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} `{}` (expected one of: {})",
            self.kind,
            self.value,
            self.expected().join(", ")
        )
    }
}

impl std::error::Error for ParseError {}
