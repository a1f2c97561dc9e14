//! Blog and the commercial it links to.

use dioxus::prelude::*;

use crate::app::asset_context::use_assets;
use crate::app::Route;

/// Commercial shown on the BlogVideo page.
pub const COMMERCIAL_VIDEO: &str = "sunglasses_commercial.mp4";

struct Post {
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    focal: &'static str,
    caption: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        image: "formal.jpeg",
        alt: "Business photo",
        title: "Business click",
        focal: "3.4x",
        caption: "Raw portrait with natural lighting. Reflects my confident, composed identity as a designer.",
    },
    Post {
        image: "EYE.jpeg",
        alt: "Passion photo",
        title: "Passion",
        focal: "1x",
        caption: "Captured during live sketching. Art is my calm and passion, a space where I feel most myself.",
    },
    Post {
        image: "CLOCK.jpeg",
        alt: "Aesthetic photo clicked in Ireland",
        title: "Aesthetic click",
        focal: "1.6x",
        caption: "Ambient light, raw capture. I love spontaneous beauty, especially buildings, through my designer's lens.",
    },
];

#[component]
pub fn Blog() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page blog-page-horizontal",
            h1 { "Blog" }
            p { class: "blog-intro",
                "Each image below reflects a unique facet of my journey: aesthetic, passion, and professionalism."
            }
            div { class: "blog-horizontal-row",
                for post in POSTS {
                    div { key: "{post.image}", class: "blog-card",
                        img {
                            class: "blog-image-portrait",
                            src: assets.resolve(post.image),
                            alt: post.alt,
                        }
                        h2 { "{post.title}" }
                        p {
                            strong { "Camera:" }
                            " iPhone 16 Pro | "
                            strong { "Focal:" }
                            " {post.focal}"
                        }
                        p { "{post.caption}" }
                    }
                }
            }
            Link { class: "video-link", to: Route::BlogVideo {}, "Watch Sunglasses Commercial" }
        }
    }
}

#[component]
pub fn BlogVideo() -> Element {
    let assets = use_assets();

    rsx! {
        div { class: "page blog-video",
            h1 { "Sunglasses Commercial" }
            video { class: "commercial", controls: true,
                source { src: assets.resolve(COMMERCIAL_VIDEO), r#type: "video/mp4" }
                "Your browser does not support the video tag."
            }
            Link { class: "video-link", to: Route::Blog {}, "← Back to Blog" }
        }
    }
}
