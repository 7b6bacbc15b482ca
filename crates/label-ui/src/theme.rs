use dioxus::prelude::*;
use label_types::Theme;

use crate::hooks::use_prop_change;

/// Shared theme state provided as context.
///
/// Components read it through [`use_theme`]; the showcase's settings panel
/// writes it through [`ThemeState::apply`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

impl ThemeState {
    /// Replace the active theme. Every label reading it re-renders.
    pub fn apply(&mut self, theme: Theme) {
        tracing::debug!(?theme.input_label, "applying theme");
        self.theme.set(theme);
    }
}

/// Provides a [`Theme`] to every component below it.
///
/// [`ThemeState::apply`] swaps the theme at runtime; a new `theme` prop
/// replaces whatever was applied last.
#[component]
pub fn ThemeProvider(#[props(default)] theme: Theme, children: Element) -> Element {
    let mut state = ThemeState {
        theme: use_signal(|| theme.clone()),
    };
    if use_prop_change(&theme).is_some() {
        state.apply(theme);
    }
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Hook to access the theme state, if a [`ThemeProvider`] is mounted.
pub fn use_theme_state() -> Option<ThemeState> {
    try_use_context::<ThemeState>()
}

/// The active theme, or the default theme outside any provider.
pub fn use_theme() -> Theme {
    match use_theme_state() {
        Some(state) => state.theme.cloned(),
        None => Theme::default(),
    }
}
