//! Page rendering tests
//!
//! Renders pages through Dioxus SSR with the contexts the app root would
//! provide, and checks every embedded asset URL carries the base path.
//!
//! Pages containing router `Link`s (Blog, BlogVideo, NotFound) and the shell
//! itself are rendered under a real router in `router_render.rs`.
//!
//! Run with: cargo test --test page_render

#![cfg(feature = "server")]

use dioxus::prelude::*;

use portfolio_shell::app::asset_context::use_asset_provider;
use portfolio_shell::app::components::{Footer, ThemeToggle};
use portfolio_shell::app::pages::{About, Contact, Gallery, Home, Works};
use portfolio_shell::app::theme::{use_theme_provider, ThemeMode};
use portfolio_shell::assets::{AssetResolver, BasePath};

/// Stands in for the App root: provides the asset resolver and theme.
#[component]
fn Harness(resolver: AssetResolver, theme: ThemeMode, children: Element) -> Element {
    use_asset_provider(resolver);
    use_theme_provider(theme, false);

    rsx! {
        {children}
    }
}

fn production() -> AssetResolver {
    AssetResolver::new(BasePath::new("/appname"))
}

fn development() -> AssetResolver {
    AssetResolver::new(BasePath::root())
}

#[test]
fn home_shows_profile_picture_under_base_path() {
    let html = dioxus::ssr::render_element(rsx! {
        Harness { resolver: production(), theme: ThemeMode::Light, Home {} }
    });

    assert!(html.contains("/appname/profile picture.jpeg"), "{html}");
    assert!(html.contains("Shania Sunil"));
    assert!(html.contains("Interior Designer | UI/UX Designer"));
}

#[test]
fn contact_offers_cv_download() {
    let resolver = production();
    let expected = resolver.resolve("RESUME 2025.pdf");

    let html = dioxus::ssr::render_element(rsx! {
        Harness { resolver: resolver, theme: ThemeMode::Light, Contact {} }
    });

    assert_eq!(expected, "/appname/RESUME 2025.pdf");
    assert!(html.contains(&expected), "CV link missing:\n{html}");
    assert!(html.contains("download="), "CV link should download:\n{html}");
    assert!(html.contains("Download My CV"));
    assert!(html.contains("shaniasunil17@gmail.com"));
}

#[test]
fn gallery_in_development_uses_root() {
    let html = dioxus::ssr::render_element(rsx! {
        Harness { resolver: development(), theme: ThemeMode::Light, Gallery {} }
    });

    for file in [
        "/office.jpeg",
        "/cxo lounge mr2.jpeg",
        "/cxo lounge mr.jpeg",
        "/cxo lounge.jpeg",
    ] {
        assert!(html.contains(file), "{file} missing:\n{html}");
    }
    assert!(!html.contains("/appname"));
}

#[test]
fn works_lists_three_projects() {
    let html = dioxus::ssr::render_element(rsx! {
        Harness { resolver: production(), theme: ThemeMode::Light, Works {} }
    });

    assert_eq!(html.matches("work-card").count(), 3, "{html}");
    assert!(html.contains("/appname/concentrix.jpg"));
    assert!(html.contains("/appname/warli 2.jpg"));
    assert!(html.contains("/appname/cafe.jpg"));
}

#[test]
fn about_has_no_assets() {
    let html = dioxus::ssr::render_element(rsx! {
        Harness { resolver: production(), theme: ThemeMode::Light, About {} }
    });

    assert!(html.contains("About Me"));
    assert!(!html.contains("<img"));
}

#[test]
fn theme_toggle_label_names_next_mode() {
    let light = dioxus::ssr::render_element(rsx! {
        Harness { resolver: development(), theme: ThemeMode::Light, ThemeToggle {} }
    });
    let dark = dioxus::ssr::render_element(rsx! {
        Harness { resolver: development(), theme: ThemeMode::Dark, ThemeToggle {} }
    });

    assert!(light.contains("🌙 Dark"), "{light}");
    assert!(dark.contains("☀️ Light"), "{dark}");
}

#[test]
fn footer_credits_owner() {
    let html = dioxus::ssr::render_element(rsx! { Footer {} });
    assert!(html.contains("2025 Shania Sunil"), "{html}");
}
