use dioxus::prelude::*;
use label_types::{
    input_label_classes, input_label_style, resolve_owner_state, ClassOverrides,
    InputLabelOptions, LabelColor, Margin, Size, Style, Variant,
};

use crate::components::{use_form_control, FormLabel, FormLabelProps};
use crate::theme::use_theme;

/// A label that floats above its input once the input is focused or filled.
#[derive(Props, Clone, PartialEq)]
pub struct InputLabelProps {
    /// Class overrides per slot. Keys this label does not compute
    /// (`focused`, `disabled`, `error`, ...) reach the inner form label.
    #[props(default)]
    pub classes: ClassOverrides,
    pub color: Option<LabelColor>,
    /// Turns off the position/colour transition. Defaults to `false`.
    pub disable_animation: Option<bool>,
    pub disabled: Option<bool>,
    pub error: Option<bool>,
    pub focused: Option<bool>,
    pub margin: Option<Margin>,
    pub required: Option<bool>,
    /// Unset derives shrink from the enclosing form control.
    pub shrink: Option<bool>,
    pub size: Option<Size>,
    /// Declarations applied after the computed label style.
    pub sx: Option<Style>,
    pub variant: Option<Variant>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn InputLabel(props: InputLabelProps) -> Element {
    let theme = use_theme();
    let form_control = use_form_control();

    let options = InputLabelOptions {
        classes: props.classes.clone(),
        color: props.color.clone(),
        disable_animation: props.disable_animation,
        disabled: props.disabled,
        error: props.error,
        focused: props.focused,
        margin: props.margin,
        required: props.required,
        shrink: props.shrink,
        size: props.size,
        variant: props.variant,
    }
    .with_defaults(&theme.input_label);

    let owner = resolve_owner_state(&options, form_control.as_ref());
    let classes = input_label_classes(&owner);
    let mut style = input_label_style(&owner, &theme);
    if let Some(sx) = &props.sx {
        style.merge(sx);
    }

    tracing::trace!(
        shrink = owner.shrink,
        form_control = owner.form_control,
        variant = ?owner.variant,
        size = ?owner.size,
        "input label resolved"
    );

    let mut label_classes: ClassOverrides = classes.passthrough.into_iter().collect();
    label_classes.insert("root", classes.root);
    if let Some(asterisk) = classes.asterisk {
        label_classes.insert("asterisk", asterisk);
    }

    let base = vec![Attribute::new(
        "data-shrink",
        if owner.shrink { "true" } else { "false" },
        None,
        false,
    )];
    let attributes = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    let label = FormLabelProps {
        classes: label_classes,
        color: options.color,
        disabled: options.disabled,
        error: options.error,
        filled: None,
        focused: options.focused,
        required: Some(owner.required),
        sx: Some(style),
        onmounted: props.onmounted,
        attributes,
        children: props.children,
    };

    rsx! {
        FormLabel { ..label }
    }
}
