//! Landing page.

use dioxus::prelude::*;

use crate::app::asset_context::use_assets;

#[component]
pub fn Home() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page",
            img {
                class: "profile-pic",
                src: assets.resolve("profile picture.jpeg"),
                alt: "Shania Sunil",
            }
            h1 { "Shania Sunil" }
            h2 { "Interior Designer | UI/UX Designer" }
        }
    }
}
