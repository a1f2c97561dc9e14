//! Fallback for locations that match no registered page.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no page registered for location");

    rsx! {
        div { class: "page not-found",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Back to Home" }
        }
    }
}
