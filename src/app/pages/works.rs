//! Project showcase.

use dioxus::prelude::*;

use crate::app::asset_context::use_assets;

struct Project {
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        image: "concentrix.jpg",
        alt: "Concentrix office design",
        title: "Concentrix Office Design",
        summary: "Modern textures and warm tones for a cozy transformation.",
    },
    Project {
        image: "warli 2.jpg",
        alt: "Graphic design for Concentrix",
        title: "Graphic Design for Concentrix",
        summary: "Understood the design requirements and executed the project.",
    },
    Project {
        image: "cafe.jpg",
        alt: "Smartworks Cafe",
        title: "Smartworks Cafe",
        summary: "This two-level cafe features a modern rustic design with natural textures like a thatched ceiling and wicker lights, combined with industrial elements and a variety of seating areas.",
    },
];

#[component]
pub fn Works() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page",
            h1 { "My Works" }
            p { "Here are a few of my Interior Design and Graphic design projects that have been executed." }
            div { class: "works-grid",
                for project in PROJECTS {
                    div { key: "{project.image}", class: "work-card",
                        img { src: assets.resolve(project.image), alt: project.alt }
                        h3 { "{project.title}" }
                        p { "{project.summary}" }
                    }
                }
            }
        }
    }
}
