use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// Visual presentation of an input and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Filled,
    Outlined,
    #[default]
    Standard,
}

/// All variants in declaration order.
pub const ALL_VARIANTS: &[Variant] = &[Variant::Filled, Variant::Outlined, Variant::Standard];

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Standard => "standard",
        }
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filled" => Ok(Variant::Filled),
            "outlined" => Ok(Variant::Outlined),
            "standard" => Ok(Variant::Standard),
            other => Err(ParseError::new(ParseErrorKind::Variant, other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control density. `Medium` is the regular size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Medium,
    Small,
}

pub const ALL_SIZES: &[Size] = &[Size::Medium, Size::Small];

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Medium => "medium",
            Size::Small => "small",
        }
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medium" => Ok(Size::Medium),
            "small" => Ok(Size::Small),
            other => Err(ParseError::new(ParseErrorKind::Size, other)),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical spacing of the enclosing form control.
///
/// Regular spacing has no token; leave the `Option<Margin>` unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Margin {
    Dense,
}

impl Margin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Margin::Dense => "dense",
        }
    }
}

impl FromStr for Margin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" => Ok(Margin::Dense),
            other => Err(ParseError::new(ParseErrorKind::Margin, other)),
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette colour a label switches to while focused.
///
/// Any non-empty string is accepted; unknown names become `Custom` and are
/// looked up in the theme palette's custom table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelColor {
    Error,
    Info,
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Custom(String),
}

impl LabelColor {
    pub fn as_str(&self) -> &str {
        match self {
            LabelColor::Error => "error",
            LabelColor::Info => "info",
            LabelColor::Primary => "primary",
            LabelColor::Secondary => "secondary",
            LabelColor::Success => "success",
            LabelColor::Warning => "warning",
            LabelColor::Custom(name) => name,
        }
    }

    /// Slot suffix used by `color<Name>` classes, e.g. `Secondary`.
    pub fn capitalized(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for LabelColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(LabelColor::Error),
            "info" => Ok(LabelColor::Info),
            "primary" => Ok(LabelColor::Primary),
            "secondary" => Ok(LabelColor::Secondary),
            "success" => Ok(LabelColor::Success),
            "warning" => Ok(LabelColor::Warning),
            "" => Err(ParseError::new(ParseErrorKind::Color, s)),
            other if other.chars().any(char::is_whitespace) => {
                Err(ParseError::new(ParseErrorKind::Color, other))
            }
            other => Ok(LabelColor::Custom(other.to_string())),
        }
    }
}

impl TryFrom<String> for LabelColor {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, <LabelColor as TryFrom<String>>::Error> {
        value.parse()
    }
}

impl From<LabelColor> for String {
    fn from(color: LabelColor) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
