use serde::{Deserialize, Serialize};

use crate::tokens::{LabelColor, Margin, Size, Variant};

/// State an enclosing form control shares with the label and input inside it.
///
/// Labels only read this; inputs report `focused` and `filled` back into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormControlState {
    #[serde(default)]
    pub filled: bool,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub adorned_start: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub margin: Option<Margin>,
    #[serde(default)]
    pub color: Option<LabelColor>,
}

impl FormControlState {
    /// Whether a label inside this control should float above the input.
    pub fn should_shrink(&self) -> bool {
        self.filled || self.focused || self.adorned_start
    }

    /// Apply a change in the control's declared props.
    ///
    /// Only fields that differ between `previous` and `next` are written, so
    /// `focused` and `filled` reported by an input survive until the matching
    /// prop itself changes.
    pub fn sync_declared(&mut self, previous: &FormControlState, next: &FormControlState) {
        macro_rules! sync {
            ($($field:ident),+) => {
                $(
                    if previous.$field != next.$field {
                        self.$field = next.$field.clone();
                    }
                )+
            };
        }
        sync!(
            filled,
            focused,
            adorned_start,
            disabled,
            error,
            required,
            size,
            variant,
            margin,
            color
        );
    }
}

/// Explicit prop wins; otherwise read the ambient control's value.
pub fn form_control_value<T>(
    explicit: Option<T>,
    form_control: Option<&FormControlState>,
    ambient: impl FnOnce(&FormControlState) -> Option<T>,
) -> Option<T> {
    explicit.or_else(|| form_control.and_then(ambient))
}
