//! The plain form label the floating input label renders through.

use crate::classes::{compose_slot, ClassOverrides};
use crate::form_control::{form_control_value, FormControlState};
use crate::style::Style;
use crate::theme::Theme;
use crate::tokens::LabelColor;

pub const FORM_LABEL: &str = "FormLabel";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLabelOptions {
    pub classes: ClassOverrides,
    pub color: Option<LabelColor>,
    pub disabled: Option<bool>,
    pub error: Option<bool>,
    pub filled: Option<bool>,
    pub focused: Option<bool>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLabelState {
    pub color: LabelColor,
    pub disabled: bool,
    pub error: bool,
    pub filled: bool,
    pub focused: bool,
    pub required: bool,
    pub classes: ClassOverrides,
}

pub fn resolve_form_label_state(
    options: &FormLabelOptions,
    form_control: Option<&FormControlState>,
) -> FormLabelState {
    let flag = |explicit: Option<bool>, ambient: fn(&FormControlState) -> bool| {
        form_control_value(explicit, form_control, |fc| Some(ambient(fc))).unwrap_or(false)
    };

    FormLabelState {
        color: form_control_value(options.color.clone(), form_control, |fc| fc.color.clone())
            .unwrap_or_default(),
        disabled: flag(options.disabled, |fc| fc.disabled),
        error: flag(options.error, |fc| fc.error),
        filled: flag(options.filled, |fc| fc.filled),
        focused: flag(options.focused, |fc| fc.focused),
        required: flag(options.required, |fc| fc.required),
        classes: options.classes.clone(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormLabelClasses {
    pub root: String,
    pub asterisk: String,
}

pub fn form_label_classes(state: &FormLabelState) -> FormLabelClasses {
    let color_slot = format!("color{}", state.color.capitalized());
    let root = compose_slot(
        FORM_LABEL,
        &[
            Some("root"),
            Some(color_slot.as_str()),
            state.disabled.then_some("disabled"),
            state.error.then_some("error"),
            state.filled.then_some("filled"),
            state.focused.then_some("focused"),
            state.required.then_some("required"),
        ],
        &state.classes,
    )
    .unwrap_or_default();
    let asterisk = compose_slot(
        FORM_LABEL,
        &[Some("asterisk"), state.error.then_some("error")],
        &state.classes,
    )
    .unwrap_or_default();

    FormLabelClasses { root, asterisk }
}

/// Colour the label text takes for its current state.
///
/// Error beats disabled, which beats focused.
fn label_color<'a>(state: &FormLabelState, theme: &'a Theme) -> &'a str {
    let palette = &theme.palette;
    if state.error {
        palette.error.as_str()
    } else if state.disabled {
        palette.text_disabled.as_str()
    } else if state.focused {
        palette
            .main(&state.color)
            .unwrap_or(palette.primary.as_str())
    } else {
        palette.text_secondary.as_str()
    }
}

/// Theme-driven declarations. Box layout lives in the component stylesheet.
pub fn form_label_style(state: &FormLabelState, theme: &Theme) -> Style {
    let typography = &theme.typography;
    Style::new()
        .with("color", label_color(state, theme))
        .with("font-family", typography.font_family.as_str())
        .with("font-weight", typography.font_weight_regular.to_string())
        .with("font-size", typography.body1_font_size.as_str())
        .with("letter-spacing", typography.body1_letter_spacing.as_str())
}

pub fn asterisk_style(state: &FormLabelState, theme: &Theme) -> Style {
    if state.error {
        Style::new().with("color", theme.palette.error.as_str())
    } else {
        Style::new()
    }
}
