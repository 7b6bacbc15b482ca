//! Dioxus components for form labels: the `FormControl` context provider,
//! the themed `FormLabel`, and the floating `InputLabel` built on it.

pub mod components;
mod hooks;
pub mod theme;

pub use components::*;
pub use theme::{use_theme, use_theme_state, ThemeProvider, ThemeState};

/// Core types, re-exported so callers need a single dependency.
pub use label_types as types;
