//! Photo gallery, served at `/menu`.

use dioxus::prelude::*;

use crate::app::asset_context::use_assets;

/// (file, alt text, grid modifier)
const PHOTOS: &[(&str, &str, &str)] = &[
    ("office.jpeg", "Project 1", "item-large"),
    ("cxo lounge mr2.jpeg", "Project 2", "item-tall"),
    ("cxo lounge mr.jpeg", "Project 3", ""),
    ("cxo lounge.jpeg", "Project 4", "item-wide"),
];

#[component]
pub fn Gallery() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page",
            h1 { "Gallery" }
            div { class: "gallery-grid",
                for (file, alt, modifier) in PHOTOS.iter().copied() {
                    img {
                        key: "{file}",
                        class: "grid-item {modifier}",
                        src: assets.resolve(file),
                        alt: alt,
                    }
                }
            }
        }
    }
}
