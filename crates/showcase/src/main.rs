use dioxus::prelude::*;
use label_types::{LabelColor, Variant, ALL_SIZES, ALL_VARIANTS};
use label_ui::{use_form_control_signal, use_theme_state, FormControl, InputLabel, ThemeProvider};

mod config;

fn main() {
    config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = config::app_config().theme;

    rsx! {
        ThemeProvider { theme: theme,
            main { style: "font-family: sans-serif; padding: 24px;",
                h1 { "Input labels" }
                AnimationToggle {}
                section {
                    h2 { "Live fields" }
                    for variant in ALL_VARIANTS.iter().copied() {
                        FormControl { key: "live-{variant}", variant: variant, color: LabelColor::Secondary,
                            style: "margin-right: 24px; min-width: 220px;",
                            InputLabel { required: true, "{variant} field" }
                            FieldInput { variant: variant }
                        }
                    }
                }
                for variant in ALL_VARIANTS.iter().copied() {
                    section { key: "{variant}",
                        h2 { "{variant}" }
                        for size in ALL_SIZES.iter().copied() {
                            for shrink in [false, true] {
                                FormControl {
                                    key: "{variant}-{size}-{shrink}",
                                    variant: variant,
                                    size: size,
                                    style: "margin-right: 24px; min-width: 220px;",
                                    InputLabel { shrink: shrink, "{size}, shrink = {shrink}" }
                                    FieldInput { variant: variant }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Flips the theme-wide animation default at runtime.
#[component]
fn AnimationToggle() -> Element {
    let Some(mut theme_state) = use_theme_state() else {
        return rsx! {};
    };
    let disabled = theme_state.theme.read().input_label.disable_animation.unwrap_or(false);

    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: disabled,
                onchange: move |evt: FormEvent| {
                    let mut theme = theme_state.theme.cloned();
                    theme.input_label.disable_animation = Some(evt.checked());
                    theme_state.apply(theme);
                },
            }
            " Disable label animation"
        }
    }
}

/// Minimal input that reports focus and content to its form control.
#[component]
fn FieldInput(variant: Variant) -> Element {
    let control = use_form_control_signal();
    let border = match variant {
        Variant::Outlined => "border: 1px solid rgba(0, 0, 0, 0.23); border-radius: 4px;",
        Variant::Filled => "border: 0; border-bottom: 1px solid rgba(0, 0, 0, 0.42); background: rgba(0, 0, 0, 0.06);",
        Variant::Standard => "border: 0; border-bottom: 1px solid rgba(0, 0, 0, 0.42); margin-top: 16px;",
    };

    rsx! {
        input {
            style: "font: inherit; padding: 16.5px 14px 8px; {border}",
            onfocus: move |_| {
                if let Some(mut state) = control {
                    state.write().focused = true;
                }
            },
            onblur: move |_| {
                if let Some(mut state) = control {
                    state.write().focused = false;
                }
            },
            oninput: move |evt: FormEvent| {
                if let Some(mut state) = control {
                    state.write().filled = !evt.value().is_empty();
                }
            },
        }
    }
}
