use dioxus::prelude::*;
use label_types::{ClassOverrides, LabelColor, Size, Style, Theme, Variant};
use label_ui::{FormControl, InputLabel, ThemeProvider};
use pretty_assertions::assert_eq;

use crate::common::{attr, count_tags, render, style_value};

#[test]
fn standalone_label_renders_single_unshrunk_label() {
    fn app() -> Element {
        rsx! {
            InputLabel { "Email" }
        }
    }
    let html = render(app);

    assert_eq!(count_tags(&html, "label"), 1);
    assert_eq!(attr(&html, "label", "data-shrink").as_deref(), Some("false"));
    assert_eq!(
        attr(&html, "label", "class").as_deref(),
        Some("FormLabel-root InputLabel-root InputLabel-animated FormLabel-colorPrimary")
    );
    assert!(html.contains("Email"));
    assert_eq!(style_value(&html, "label", "position"), None);
    assert_eq!(style_value(&html, "label", "transform"), None);
    assert_eq!(style_value(&html, "label", "max-width").as_deref(), Some("100%"));
}

#[test]
fn explicit_shrink_moves_standalone_label() {
    fn app() -> Element {
        rsx! {
            InputLabel { shrink: true, "Email" }
        }
    }
    let html = render(app);

    assert_eq!(attr(&html, "label", "data-shrink").as_deref(), Some("true"));
    assert!(attr(&html, "label", "class")
        .unwrap()
        .contains("InputLabel-shrink"));
    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(0, -1.5px) scale(0.75)")
    );
    assert_eq!(style_value(&html, "label", "max-width").as_deref(), Some("133%"));
}

#[test]
fn filled_form_control_shrinks_unset_label() {
    fn app() -> Element {
        rsx! {
            FormControl { filled: true,
                InputLabel { "Name" }
            }
        }
    }
    let html = render(app);

    assert_eq!(attr(&html, "label", "data-shrink").as_deref(), Some("true"));
    let class = attr(&html, "label", "class").unwrap();
    assert!(class.contains("InputLabel-formControl"));
    assert!(class.contains("FormLabel-filled"));
    assert_eq!(style_value(&html, "label", "position").as_deref(), Some("absolute"));
}

#[test]
fn explicit_shrink_false_beats_focused_control() {
    fn app() -> Element {
        rsx! {
            FormControl { focused: true,
                InputLabel { shrink: false, "Name" }
            }
        }
    }
    let html = render(app);

    assert_eq!(attr(&html, "label", "data-shrink").as_deref(), Some("false"));
    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(0, 20px) scale(1)")
    );
}

#[test]
fn outlined_small_focused_control_floats_on_border() {
    fn app() -> Element {
        rsx! {
            FormControl { variant: Variant::Outlined, size: Size::Small, focused: true,
                InputLabel { "Search" }
            }
        }
    }
    let html = render(app);

    assert_eq!(style_value(&html, "label", "z-index").as_deref(), Some("1"));
    assert_eq!(
        style_value(&html, "label", "pointer-events").as_deref(),
        Some("none")
    );
    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(14px, -9px) scale(0.75)")
    );
    assert_eq!(
        style_value(&html, "label", "max-width").as_deref(),
        Some("calc(133% - 24px)")
    );
    let class = attr(&html, "label", "class").unwrap();
    assert!(class.contains("InputLabel-sizeSmall"));
    assert!(class.contains("InputLabel-outlined"));
    assert!(class.contains("is-focused"));
}

#[test]
fn filled_small_shrunk_label() {
    fn app() -> Element {
        rsx! {
            InputLabel { variant: Variant::Filled, size: Size::Small, shrink: true, "Amount" }
        }
    }
    let html = render(app);

    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(12px, 4px) scale(0.75)")
    );
}

#[test]
fn required_label_renders_asterisk() {
    fn app() -> Element {
        rsx! {
            InputLabel { required: true, "Password" }
        }
    }
    let html = render(app);

    assert_eq!(count_tags(&html, "span"), 1);
    assert_eq!(
        attr(&html, "span", "class").as_deref(),
        Some("FormLabel-asterisk InputLabel-asterisk")
    );
    assert_eq!(attr(&html, "span", "aria-hidden").as_deref(), Some("true"));
    assert!(html.contains("\u{2009}*"));
    assert!(attr(&html, "label", "class")
        .unwrap()
        .contains("is-required"));
}

#[test]
fn optional_label_has_no_asterisk() {
    fn app() -> Element {
        rsx! {
            InputLabel { required: false, "Nickname" }
        }
    }
    let html = render(app);

    assert_eq!(count_tags(&html, "span"), 0);
    assert!(!html.contains("asterisk"));
}

#[test]
fn required_comes_from_form_control() {
    fn app() -> Element {
        rsx! {
            FormControl { required: true,
                InputLabel { "Password" }
            }
        }
    }
    let html = render(app);

    assert_eq!(count_tags(&html, "span"), 1);
}

#[test]
fn class_overrides_merge_and_pass_through() {
    fn app() -> Element {
        rsx! {
            InputLabel {
                focused: true,
                classes: ClassOverrides::new()
                    .with("root", "custom-root")
                    .with("focused", "my-focus"),
                "Email"
            }
        }
    }
    let html = render(app);

    assert_eq!(
        attr(&html, "label", "class").as_deref(),
        Some(
            "FormLabel-root InputLabel-root custom-root InputLabel-animated \
             FormLabel-colorPrimary is-focused my-focus"
        )
    );
}

#[test]
fn unrecognized_attributes_reach_the_label() {
    fn app() -> Element {
        rsx! {
            InputLabel { id: "email-label", title: "Your email", class: "extra", "Email" }
        }
    }
    let html = render(app);

    assert_eq!(attr(&html, "label", "id").as_deref(), Some("email-label"));
    assert_eq!(attr(&html, "label", "title").as_deref(), Some("Your email"));
    assert!(attr(&html, "label", "class").unwrap().ends_with(" extra"));
}

#[test]
fn disable_animation_drops_transition() {
    fn app() -> Element {
        rsx! {
            InputLabel { disable_animation: true, "Email" }
        }
    }
    let html = render(app);

    assert_eq!(style_value(&html, "label", "transition"), None);
    assert!(!attr(&html, "label", "class")
        .unwrap()
        .contains("InputLabel-animated"));
}

#[test]
fn sx_overrides_computed_style() {
    fn app() -> Element {
        rsx! {
            InputLabel { shrink: true, sx: Style::new().with("max-width", "50%"), "Email" }
        }
    }
    let html = render(app);

    assert_eq!(style_value(&html, "label", "max-width").as_deref(), Some("50%"));
    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(0, -1.5px) scale(0.75)")
    );
}

#[test]
fn focused_color_follows_control_color() {
    fn app() -> Element {
        rsx! {
            FormControl { focused: true, color: LabelColor::Secondary,
                InputLabel { "Email" }
            }
        }
    }
    let html = render(app);

    assert_eq!(style_value(&html, "label", "color").as_deref(), Some("#9c27b0"));
    assert!(attr(&html, "label", "class")
        .unwrap()
        .contains("FormLabel-colorSecondary"));
}

#[test]
fn error_color_wins_over_focus() {
    fn app() -> Element {
        rsx! {
            FormControl { focused: true, error: true, required: true,
                InputLabel { "Email" }
            }
        }
    }
    let html = render(app);

    assert_eq!(style_value(&html, "label", "color").as_deref(), Some("#d32f2f"));
    assert_eq!(style_value(&html, "span", "color").as_deref(), Some("#d32f2f"));
    assert!(attr(&html, "span", "class").unwrap().contains("is-error"));
}

fn filled_small_theme() -> Theme {
    let mut theme = Theme::default();
    theme.input_label.variant = Some(Variant::Filled);
    theme.input_label.size = Some(Size::Small);
    theme.transitions.shorter = 90;
    theme
}

#[test]
fn theme_defaults_apply_when_props_are_unset() {
    fn app() -> Element {
        rsx! {
            ThemeProvider { theme: filled_small_theme(),
                InputLabel { "Email" }
            }
        }
    }
    let html = render(app);

    let class = attr(&html, "label", "class").unwrap();
    assert!(class.contains("InputLabel-filled"));
    assert!(class.contains("InputLabel-sizeSmall"));
    assert_eq!(
        style_value(&html, "label", "transform").as_deref(),
        Some("translate(12px, 13px) scale(1)")
    );
    assert!(style_value(&html, "label", "transition")
        .unwrap()
        .starts_with("color 90ms"));
}

#[test]
fn explicit_variant_beats_theme_default() {
    fn app() -> Element {
        rsx! {
            ThemeProvider { theme: filled_small_theme(),
                InputLabel { variant: Variant::Standard, "Email" }
            }
        }
    }
    let html = render(app);

    let class = attr(&html, "label", "class").unwrap();
    assert!(class.contains("InputLabel-standard"));
    assert!(!class.contains("InputLabel-filled"));
}

#[test]
fn rendering_is_idempotent() {
    fn app() -> Element {
        rsx! {
            FormControl { variant: Variant::Filled, filled: true, required: true,
                InputLabel { "Email" }
            }
        }
    }
    assert_eq!(render(app), render(app));
}
