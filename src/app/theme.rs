//! Theme management.
//!
//! Provides a theme context holding the light/dark mode for the whole tab.
//! The only mutation is [`ThemeContext::toggle`]. Persistence to localStorage
//! is opt-in (`PORTFOLIO_PERSIST_THEME`); without it every load starts light.

use std::fmt;

use dioxus::prelude::*;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Toggle button label, naming the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark",
            ThemeMode::Dark => "☀️ Light",
        }
    }

    /// CSS class to apply to :root
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    current: Signal<ThemeMode>,
    persist: bool,
}

impl ThemeContext {
    /// Get current theme
    pub fn mode(&self) -> ThemeMode {
        (self.current)()
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        let mut current = self.current;
        let next = current.peek().toggled();
        current.set(next);
        tracing::debug!(theme = %next, persist = self.persist, "theme toggled");

        #[cfg(target_arch = "wasm32")]
        {
            apply_theme_to_dom(next);
            if self.persist {
                save_theme_to_storage(next);
            }
        }
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(initial: ThemeMode, persist: bool) -> ThemeContext {
    let current = use_signal(|| initial);

    let ctx = use_context_provider(|| ThemeContext { current, persist });

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let mut current = current;
            let mode = if persist {
                load_theme_from_storage().unwrap_or(initial)
            } else {
                initial
            };
            current.set(mode);
            apply_theme_to_dom(mode);
        });
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "portfolio-theme";

#[cfg(target_arch = "wasm32")]
fn load_theme_from_storage() -> Option<ThemeMode> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    ThemeMode::parse(&value)
}

#[cfg(target_arch = "wasm32")]
fn save_theme_to_storage(theme: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!("could not save theme to localStorage");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.class_list().remove_2("theme-light", "theme-dark");
                let _ = root.class_list().add_1(theme.css_class());
            }
        }
    }
}
