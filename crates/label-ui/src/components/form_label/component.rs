use dioxus::prelude::*;
use label_types::{
    asterisk_style, form_label_classes, form_label_style, resolve_form_label_state,
    ClassOverrides, FormLabelOptions, LabelColor, Style,
};

use crate::components::use_form_control;
use crate::theme::use_theme;

/// Thin space followed by the required marker.
const ASTERISK: &str = "\u{2009}*";

/// A themed `<label>` whose colour follows the enclosing form control.
#[derive(Props, Clone, PartialEq)]
pub struct FormLabelProps {
    #[props(default)]
    pub classes: ClassOverrides,
    pub color: Option<LabelColor>,
    pub disabled: Option<bool>,
    pub error: Option<bool>,
    pub filled: Option<bool>,
    pub focused: Option<bool>,
    pub required: Option<bool>,
    /// Declarations applied over the label's own style.
    pub sx: Option<Style>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn FormLabel(props: FormLabelProps) -> Element {
    let theme = use_theme();
    let form_control = use_form_control();

    let options = FormLabelOptions {
        classes: props.classes.clone(),
        color: props.color.clone(),
        disabled: props.disabled,
        error: props.error,
        filled: props.filled,
        focused: props.focused,
        required: props.required,
    };
    let state = resolve_form_label_state(&options, form_control.as_ref());
    let classes = form_label_classes(&state);

    let mut style = form_label_style(&state, &theme);
    if let Some(sx) = &props.sx {
        style.merge(sx);
    }
    let asterisk_css = asterisk_style(&state, &theme).to_css();

    let base = vec![
        Attribute::new("class", classes.root, None, false),
        Attribute::new("style", style.to_css(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let onmounted = props.onmounted;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            onmounted: move |evt| {
                if let Some(handler) = &onmounted {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
            if state.required {
                span {
                    class: classes.asterisk,
                    style: if asterisk_css.is_empty() { None } else { Some(asterisk_css) },
                    "aria-hidden": "true",
                    "{ASTERISK}"
                }
            }
        }
    }
}
