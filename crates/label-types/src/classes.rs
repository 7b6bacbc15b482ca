use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State slots that share one class name across every component, so a single
/// stylesheet rule can target e.g. any focused element.
pub const GLOBAL_STATE_SLOTS: &[&str] = &[
    "active",
    "checked",
    "completed",
    "disabled",
    "error",
    "expanded",
    "focused",
    "focusVisible",
    "required",
    "selected",
];

/// Class name for `slot` of `component`, e.g. `InputLabel-shrink` or `is-focused`.
pub fn utility_class(component: &str, slot: &str) -> String {
    if GLOBAL_STATE_SLOTS.contains(&slot) {
        format!("is-{slot}")
    } else {
        format!("{component}-{slot}")
    }
}

/// Caller-supplied class names keyed by slot (`root`, `asterisk`, `focused`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassOverrides(BTreeMap<String, String>);

impl ClassOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: impl Into<String>, class: impl Into<String>) -> Self {
        self.insert(slot, class);
        self
    }

    pub fn insert(&mut self, slot: impl Into<String>, class: impl Into<String>) {
        self.0.insert(slot.into(), class.into());
    }

    /// Override for `slot`, ignoring empty strings.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0
            .get(slot)
            .map(String::as_str)
            .filter(|class| !class.is_empty())
    }

    /// Every override whose slot is not in `composed`.
    pub fn without(&self, composed: &[&str]) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter(|(slot, _)| !composed.contains(&slot.as_str()))
            .map(|(slot, class)| (slot.clone(), class.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClassOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Resolve one slot's candidate list into a class string.
///
/// `None` candidates are skipped. Each active candidate contributes its
/// utility class followed by the caller's override for the same key.
/// Returns `None` when nothing is active.
pub fn compose_slot(
    component: &str,
    candidates: &[Option<&str>],
    overrides: &ClassOverrides,
) -> Option<String> {
    let mut tokens: Vec<String> = Vec::new();
    for key in candidates.iter().flatten() {
        tokens.push(utility_class(component, key));
        if let Some(class) = overrides.get(key) {
            tokens.push(class.to_string());
        }
    }
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
