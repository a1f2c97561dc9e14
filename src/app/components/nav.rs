//! Navigation bar component.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::registry;
use crate::app::Route;

/// Links to every primary page plus the theme toggle.
///
/// BlogVideo is reachable from the Blog page only, so it has no nav label.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            for (page, label) in registry::nav_links() {
                Link {
                    key: "{page:?}",
                    to: Route::from(page),
                    active_class: "active",
                    "{label}"
                }
            }
            ThemeToggle {}
        }
    }
}
