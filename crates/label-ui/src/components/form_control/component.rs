use dioxus::prelude::*;
use label_types::{FormControlState, LabelColor, Margin, Size, Variant};

use crate::hooks::use_prop_change;

// ─── Context ───────────────────────────────────────────────────────────

/// Hook to read the enclosing form control's state, if there is one.
pub fn use_form_control() -> Option<FormControlState> {
    use_form_control_signal().map(|state| state.cloned())
}

/// Hook for inputs that report focus and content back to their control.
pub fn use_form_control_signal() -> Option<Signal<FormControlState>> {
    try_use_context::<Signal<FormControlState>>()
}

// ─── Provider ──────────────────────────────────────────────────────────

/// Groups a label with its input and shares their state with both.
///
/// Inputs update `focused` and `filled` through [`use_form_control_signal`].
/// A prop that changes between renders overwrites the matching field, so the
/// `focused` and `filled` props still win over reported state when they move.
#[component]
pub fn FormControl(
    variant: Option<Variant>,
    size: Option<Size>,
    margin: Option<Margin>,
    color: Option<LabelColor>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] error: bool,
    #[props(default = false)] focused: bool,
    #[props(default = false)] filled: bool,
    #[props(default = false)] adorned_start: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let declared = FormControlState {
        filled,
        focused,
        adorned_start,
        disabled,
        error,
        required,
        size,
        variant,
        margin,
        color,
    };
    let mut state = use_signal(|| declared.clone());
    if let Some(previous) = use_prop_change(&declared) {
        tracing::debug!(?declared, "form control props changed");
        state.write().sync_declared(&previous, &declared);
    }
    use_context_provider(|| state);

    let mut base = vec![Attribute::new("class", "form-control", None, false)];
    if let Some(variant) = variant {
        base.push(Attribute::new("data-variant", variant.as_str(), None, false));
    }
    if let Some(size) = size {
        base.push(Attribute::new("data-size", size.as_str(), None, false));
    }
    if let Some(margin) = margin {
        base.push(Attribute::new("data-margin", margin.as_str(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}
