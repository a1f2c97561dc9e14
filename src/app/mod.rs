//! Dioxus application entry point.
//!
//! This module provides the root App component, the route table and the
//! contexts every page reads from (theme, asset resolver).

use dioxus::prelude::*;

pub mod asset_context;
pub mod components;
pub mod pages;
pub mod registry;
pub mod theme;

use crate::assets::{AssetResolver, BasePath};
use crate::config::SiteConfig;
use asset_context::use_asset_provider;
use components::Shell;
use pages::{About, Blog, BlogVideo, Contact, Gallery, Home, NotFound, Works};
use registry::PageId;
use theme::{use_theme_provider, ThemeMode};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    let site = use_hook(|| {
        // Same prefix the router history strips, so links and assets agree
        let site = SiteConfig::from_build().aligned_with(dioxus::cli_config::base_path().as_deref());
        tracing::info!(
            mode = site.mode.as_str(),
            base_path = %site.base_path,
            "portfolio shell starting"
        );
        site
    });

    // Theme starts light; persisted value (if enabled) is applied client-side
    use_theme_provider(ThemeMode::default(), site.persist_theme);

    use_asset_provider(AssetResolver::new(site.base_path.clone()));

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/works")]
        Works {},
        #[route("/menu")]
        Gallery {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/video")]
        BlogVideo {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Route::Home {},
            PageId::About => Route::About {},
            PageId::Works => Route::Works {},
            PageId::Gallery => Route::Gallery {},
            PageId::Blog => Route::Blog {},
            PageId::BlogVideo => Route::BlogVideo {},
            PageId::Contact => Route::Contact {},
        }
    }
}

impl Route {
    /// Page rendered for this route (`None` for the not-found fallback).
    pub fn page(&self) -> Option<PageId> {
        match self {
            Route::Home {} => Some(PageId::Home),
            Route::About {} => Some(PageId::About),
            Route::Works {} => Some(PageId::Works),
            Route::Gallery {} => Some(PageId::Gallery),
            Route::Blog {} => Some(PageId::Blog),
            Route::BlogVideo {} => Some(PageId::BlogVideo),
            Route::Contact {} => Some(PageId::Contact),
            Route::NotFound { .. } => None,
        }
    }

    /// Resolve a browser location (`/appname/contact?x=1`) to a route.
    ///
    /// Query and fragment are ignored, the base path is stripped and the
    /// remainder must equal a registered path exactly. Everything else,
    /// including locations outside the mount, is `NotFound`.
    pub fn from_location(location: &str, base: &BasePath) -> Self {
        let path = location
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let relative = base.strip_prefix(path);

        match relative.and_then(registry::match_path) {
            Some(page) => Route::from(page),
            None => Route::NotFound {
                segments: relative
                    .unwrap_or(path)
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::PAGES;

    #[test]
    fn test_route_paths_agree_with_registry() {
        for entry in PAGES {
            assert_eq!(Route::from(entry.id).to_string(), entry.path);
            assert_eq!(Route::from(entry.id).page(), Some(entry.id));
        }
    }

    #[test]
    fn test_initial_location_is_home() {
        let base = BasePath::root();
        assert_eq!(Route::from_location("/", &base), Route::Home {});
        assert_eq!(Route::from_location("", &base), Route::Home {});
    }

    #[test]
    fn test_production_prefix_is_stripped() {
        let base = BasePath::new("/appname");
        assert_eq!(Route::from_location("/appname", &base), Route::Home {});
        assert_eq!(Route::from_location("/appname/", &base), Route::Home {});
        assert_eq!(
            Route::from_location("/appname/contact", &base),
            Route::Contact {}
        );
        assert_eq!(
            Route::from_location("/appname/blog/video", &base),
            Route::BlogVideo {}
        );
        assert_eq!(Route::from_location("/appname/menu", &base), Route::Gallery {});
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let base = BasePath::root();
        assert_eq!(
            Route::from_location("/contact?ref=cv#top", &base),
            Route::Contact {}
        );
        assert_eq!(Route::from_location("/blog#latest", &base), Route::Blog {});
    }

    #[test]
    fn test_unknown_paths_fall_back_to_not_found() {
        let base = BasePath::root();
        assert_eq!(
            Route::from_location("/gallery", &base),
            Route::NotFound {
                segments: vec!["gallery".to_string()]
            }
        );
        assert_eq!(
            Route::from_location("/Contact", &base),
            Route::NotFound {
                segments: vec!["Contact".to_string()]
            }
        );
        assert_eq!(
            Route::from_location("/blog/video/extra", &base),
            Route::NotFound {
                segments: vec!["blog".into(), "video".into(), "extra".into()]
            }
        );
        assert_eq!(Route::from_location("/gallery", &base).page(), None);
    }

    #[test]
    fn test_paths_outside_mount_are_not_found() {
        let base = BasePath::new("/appname");
        assert_eq!(
            Route::from_location("/contact", &base),
            Route::NotFound {
                segments: vec!["contact".to_string()]
            }
        );
        assert!(matches!(
            Route::from_location("/appnamecontact", &base),
            Route::NotFound { .. }
        ));
    }
}
