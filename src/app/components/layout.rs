//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::nav::Navbar;
use crate::app::asset_context::use_assets;
use crate::app::theme::use_theme;
use crate::app::Route;

/// Name shown in the tab title and footer.
pub const SITE_OWNER: &str = "Shania Sunil";

/// Top-level layout: navbar, the page matched by the router, footer.
///
/// The current theme is written to the root container as both a class and
/// a `data-theme` attribute; pages inherit it from there.
#[component]
pub fn Shell() -> Element {
    let theme = use_theme();
    let assets = use_assets();
    let route = use_route::<Route>();

    let title = route.page().map(|page| page.title()).unwrap_or("Not Found");
    let full_title = format!("{} | {}", title, SITE_OWNER);
    let stylesheet = assets.resolve("main.css");
    let mode = theme.mode().as_str();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Stylesheet { href: stylesheet }

        div { class: "app {mode}", "data-theme": mode,
            Navbar {}
            div { class: "content",
                Outlet::<Route> {}
                Footer {}
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { "© 2025 {SITE_OWNER} | Interior & UI/UX Designer" }
    }
}
