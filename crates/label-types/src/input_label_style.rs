//! Ordered style rules for the floating input label.
//!
//! Each rule pairs a predicate over [`OwnerState`] with a patch. Patches are
//! applied in table order, so a later rule overrides any property an earlier
//! one set.

use crate::input_label::OwnerState;
use crate::style::Style;
use crate::theme::Theme;
use crate::tokens::Variant;

pub struct StyleRule {
    pub name: &'static str,
    pub applies: fn(&OwnerState) -> bool,
    pub patch: fn(&Theme) -> Style,
}

fn is_filled(owner: &OwnerState) -> bool {
    owner.variant == Some(Variant::Filled)
}

fn is_outlined(owner: &OwnerState) -> bool {
    owner.variant == Some(Variant::Outlined)
}

fn floating_layer(translate: &str, max_width: &str) -> Style {
    // Sits above the input's background (e.g. autofill colour) without
    // stealing its clicks.
    Style::new()
        .with("z-index", "1")
        .with("pointer-events", "none")
        .with("transform", translate)
        .with("max-width", max_width)
}

pub const INPUT_LABEL_RULES: &[StyleRule] = &[
    StyleRule {
        name: "base",
        applies: |_| true,
        patch: |_| {
            Style::new()
                .with("display", "block")
                .with("transform-origin", "top left")
                .with("white-space", "nowrap")
                .with("overflow", "hidden")
                .with("text-overflow", "ellipsis")
                .with("max-width", "100%")
        },
    },
    StyleRule {
        name: "formControl",
        applies: |owner| owner.form_control,
        patch: |_| {
            Style::new()
                .with("position", "absolute")
                .with("left", "0")
                .with("top", "0")
                .with("transform", "translate(0, 20px) scale(1)")
        },
    },
    StyleRule {
        name: "sizeSmall",
        applies: |owner| owner.is_small(),
        patch: |_| Style::new().with("transform", "translate(0, 17px) scale(1)"),
    },
    StyleRule {
        name: "shrink",
        applies: |owner| owner.shrink,
        patch: |_| {
            Style::new()
                .with("transform", "translate(0, -1.5px) scale(0.75)")
                .with("transform-origin", "top left")
                .with("max-width", "133%")
        },
    },
    StyleRule {
        name: "animated",
        applies: |owner| !owner.disable_animation,
        patch: |theme| {
            let transitions = &theme.transitions;
            Style::new().with(
                "transition",
                transitions.create(
                    &["color", "transform", "max-width"],
                    transitions.shorter,
                    &transitions.ease_out,
                ),
            )
        },
    },
    StyleRule {
        name: "filled",
        applies: is_filled,
        patch: |_| floating_layer("translate(12px, 16px) scale(1)", "calc(100% - 24px)"),
    },
    StyleRule {
        name: "filled.sizeSmall",
        applies: |owner| is_filled(owner) && owner.is_small(),
        patch: |_| Style::new().with("transform", "translate(12px, 13px) scale(1)"),
    },
    StyleRule {
        name: "filled.shrink",
        applies: |owner| is_filled(owner) && owner.shrink,
        patch: |_| {
            Style::new()
                .with("transform", "translate(12px, 7px) scale(0.75)")
                .with("max-width", "calc(133% - 24px)")
        },
    },
    StyleRule {
        name: "filled.shrink.sizeSmall",
        applies: |owner| is_filled(owner) && owner.shrink && owner.is_small(),
        patch: |_| Style::new().with("transform", "translate(12px, 4px) scale(0.75)"),
    },
    StyleRule {
        name: "outlined",
        applies: is_outlined,
        patch: |_| floating_layer("translate(14px, 16px) scale(1)", "calc(100% - 24px)"),
    },
    StyleRule {
        name: "outlined.sizeSmall",
        applies: |owner| is_outlined(owner) && owner.is_small(),
        patch: |_| Style::new().with("transform", "translate(14px, 9px) scale(1)"),
    },
    // No small+shrink refinement: a shrunk outlined label sits on the
    // border at the same offset for both sizes.
    StyleRule {
        name: "outlined.shrink",
        applies: |owner| is_outlined(owner) && owner.shrink,
        patch: |_| {
            Style::new()
                .with("max-width", "calc(133% - 24px)")
                .with("transform", "translate(14px, -9px) scale(0.75)")
        },
    },
];

/// Names of the rules that apply to `owner`, in application order.
pub fn applied_rules(owner: &OwnerState) -> Vec<&'static str> {
    INPUT_LABEL_RULES
        .iter()
        .filter(|rule| (rule.applies)(owner))
        .map(|rule| rule.name)
        .collect()
}

pub fn input_label_style(owner: &OwnerState, theme: &Theme) -> Style {
    INPUT_LABEL_RULES
        .iter()
        .filter(|rule| (rule.applies)(owner))
        .fold(Style::new(), |mut style, rule| {
            style.merge(&(rule.patch)(theme));
            style
        })
}
