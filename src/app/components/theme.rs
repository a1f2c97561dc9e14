//! Theme toggle button for the navbar.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Single button flipping light/dark. The label names the mode it switches to.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let label = theme.mode().toggle_label();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            onclick: move |_| theme.toggle(),
            "{label}"
        }
    }
}
