//! State resolution and class composition for the floating input label.

use std::collections::BTreeMap;

use crate::classes::{compose_slot, ClassOverrides};
use crate::form_control::{form_control_value, FormControlState};
use crate::theme::InputLabelDefaults;
use crate::tokens::{LabelColor, Margin, Size, Variant};

/// Utility class prefix for input label slots.
pub const INPUT_LABEL: &str = "InputLabel";

/// Props of an input label as the caller wrote them. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputLabelOptions {
    pub classes: ClassOverrides,
    pub color: Option<LabelColor>,
    pub disable_animation: Option<bool>,
    pub disabled: Option<bool>,
    pub error: Option<bool>,
    pub focused: Option<bool>,
    pub margin: Option<Margin>,
    pub required: Option<bool>,
    pub shrink: Option<bool>,
    pub size: Option<Size>,
    pub variant: Option<Variant>,
}

impl InputLabelOptions {
    /// Fill props the caller left unset from theme-wide defaults.
    pub fn with_defaults(mut self, defaults: &InputLabelDefaults) -> Self {
        self.disable_animation = self.disable_animation.or(defaults.disable_animation);
        self.variant = self.variant.or(defaults.variant);
        self.size = self.size.or(defaults.size);
        self
    }
}

/// Everything the class composer and style rules need for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerState {
    pub form_control: bool,
    pub size: Option<Size>,
    pub variant: Option<Variant>,
    pub required: bool,
    pub shrink: bool,
    pub disable_animation: bool,
    pub margin: Option<Margin>,
    pub classes: ClassOverrides,
}

impl OwnerState {
    pub fn is_small(&self) -> bool {
        self.size == Some(Size::Small)
    }
}

/// Merge explicit props with the enclosing form control, if any.
pub fn resolve_owner_state(
    options: &InputLabelOptions,
    form_control: Option<&FormControlState>,
) -> OwnerState {
    let shrink = form_control_value(options.shrink, form_control, |fc| Some(fc.should_shrink()))
        .unwrap_or(false);

    OwnerState {
        form_control: form_control.is_some(),
        size: form_control_value(options.size, form_control, |fc| fc.size),
        variant: form_control_value(options.variant, form_control, |fc| fc.variant),
        required: form_control_value(options.required, form_control, |fc| Some(fc.required))
            .unwrap_or(false),
        shrink,
        disable_animation: options.disable_animation.unwrap_or(false),
        margin: form_control_value(options.margin, form_control, |fc| fc.margin),
        classes: options.classes.clone(),
    }
}

/// Resolved class names for each input label slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedClasses {
    pub root: String,
    /// Present only when the label is required.
    pub asterisk: Option<String>,
    /// Caller overrides for slots this label does not compute (`focused`,
    /// `disabled`, `error`, ...), handed on to the form label untouched.
    pub passthrough: BTreeMap<String, String>,
}

pub fn input_label_classes(owner: &OwnerState) -> ComposedClasses {
    let root = compose_slot(
        INPUT_LABEL,
        &[
            Some("root"),
            owner.form_control.then_some("formControl"),
            (!owner.disable_animation).then_some("animated"),
            owner.shrink.then_some("shrink"),
            owner.is_small().then_some("sizeSmall"),
            owner.variant.map(|v| v.as_str()),
        ],
        &owner.classes,
    )
    .unwrap_or_default();

    let asterisk = compose_slot(
        INPUT_LABEL,
        &[owner.required.then_some("asterisk")],
        &owner.classes,
    );

    ComposedClasses {
        root,
        asterisk,
        passthrough: owner.classes.without(&["root", "asterisk"]),
    }
}
