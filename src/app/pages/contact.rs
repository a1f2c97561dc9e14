//! Contact details and CV download.

use dioxus::prelude::*;

use crate::app::asset_context::use_assets;

/// CV file in the public asset directory.
pub const RESUME_FILE: &str = "RESUME 2025.pdf";

#[component]
pub fn Contact() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page",
            h1 { "Contact Me" }
            p { "Email: shaniasunil17@gmail.com" }
            p { "Phone: +353 0000000000" }
            a {
                class: "cv-button",
                href: assets.resolve(RESUME_FILE),
                download: RESUME_FILE,
                "📄 Download My CV"
            }
        }
    }
}
