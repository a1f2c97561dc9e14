use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page",
            h1 { "About Me" }
            div { class: "about-box",
                p {
                    "Hi, I'm Shania, an interior designer with a foundation in spatial design and a growing passion for human-centered experiences. After completing my BSc in Interior Design and Management, I spent two years crafting commercial and office interiors, blending functionality with aesthetic clarity."
                }
                p {
                    "Now, I'm expanding my creative scope through an MSc in Interaction and Experience Design, where I explore how people connect with spaces, systems, and digital environments. My work bridges physical and digital experiences, always with a focus on purposeful, intuitive design."
                }
                p { "Let's create meaningful experiences together." }
            }
        }
    }
}
