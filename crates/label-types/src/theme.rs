use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tokens::{LabelColor, Size, Variant};

/// Design tokens the label styles are computed from.
///
/// Every section defaults independently, so a config file only needs to name
/// the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub transitions: Transitions,
    pub input_label: InputLabelDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub error: String,
    pub warning: String,
    pub info: String,
    pub success: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_disabled: String,
    /// Extra named colours reachable through `LabelColor::Custom`.
    pub custom: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1976d2".to_string(),
            secondary: "#9c27b0".to_string(),
            error: "#d32f2f".to_string(),
            warning: "#ed6c02".to_string(),
            info: "#0288d1".to_string(),
            success: "#2e7d32".to_string(),
            text_primary: "rgba(0, 0, 0, 0.87)".to_string(),
            text_secondary: "rgba(0, 0, 0, 0.6)".to_string(),
            text_disabled: "rgba(0, 0, 0, 0.38)".to_string(),
            custom: BTreeMap::new(),
        }
    }
}

impl Palette {
    /// Main colour for `color`, or `None` for an unregistered custom name.
    pub fn main(&self, color: &LabelColor) -> Option<&str> {
        match color {
            LabelColor::Primary => Some(&self.primary),
            LabelColor::Secondary => Some(&self.secondary),
            LabelColor::Error => Some(&self.error),
            LabelColor::Warning => Some(&self.warning),
            LabelColor::Info => Some(&self.info),
            LabelColor::Success => Some(&self.success),
            LabelColor::Custom(name) => self.custom.get(name).map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub font_weight_regular: u16,
    pub body1_font_size: String,
    pub body1_letter_spacing: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Roboto, Helvetica, Arial, sans-serif".to_string(),
            font_weight_regular: 400,
            body1_font_size: "1rem".to_string(),
            body1_letter_spacing: "0.00938em".to_string(),
        }
    }
}

/// Durations in milliseconds and easing curves for CSS transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transitions {
    pub shortest: u32,
    pub shorter: u32,
    pub short: u32,
    pub standard: u32,
    pub ease_in_out: String,
    pub ease_out: String,
    pub ease_in: String,
    pub sharp: String,
}

impl Default for Transitions {
    fn default() -> Self {
        Self {
            shortest: 150,
            shorter: 200,
            short: 250,
            standard: 300,
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
            ease_out: "cubic-bezier(0.0, 0, 0.2, 1)".to_string(),
            ease_in: "cubic-bezier(0.4, 0, 1, 1)".to_string(),
            sharp: "cubic-bezier(0.4, 0, 0.6, 1)".to_string(),
        }
    }
}

impl Transitions {
    /// Build a `transition` value animating each of `properties` the same way.
    pub fn create(&self, properties: &[&str], duration_ms: u32, easing: &str) -> String {
        properties
            .iter()
            .map(|property| format!("{property} {duration_ms}ms {easing} 0ms"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Theme-wide defaults for `InputLabel` props. Explicit props still win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLabelDefaults {
    pub disable_animation: Option<bool>,
    pub variant: Option<Variant>,
    pub size: Option<Size>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
