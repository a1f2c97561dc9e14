//! Page registry: the fixed, ordered table of pages the site serves.
//!
//! Paths here are the single source the navbar, the static host and the
//! location matcher read from. The table is checked once at startup so a
//! duplicated path fails loudly instead of silently shadowing a page.

use std::collections::HashSet;

use thiserror::Error;

/// Identifier for each static page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Works,
    Gallery,
    Blog,
    BlogVideo,
    Contact,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub id: PageId,
    /// Exact, case-sensitive path relative to the base path
    pub path: &'static str,
    /// Shown in the browser tab
    pub title: &'static str,
    /// Navbar label; `None` keeps the page out of the main navigation
    pub nav_label: Option<&'static str>,
}

impl PageId {
    pub const fn entry(self) -> PageEntry {
        match self {
            PageId::Home => PageEntry {
                id: self,
                path: "/",
                title: "Home",
                nav_label: Some("Home"),
            },
            PageId::About => PageEntry {
                id: self,
                path: "/about",
                title: "About",
                nav_label: Some("About"),
            },
            PageId::Works => PageEntry {
                id: self,
                path: "/works",
                title: "Works",
                nav_label: Some("Works"),
            },
            PageId::Gallery => PageEntry {
                id: self,
                path: "/menu",
                title: "Gallery",
                nav_label: Some("Gallery"),
            },
            PageId::Blog => PageEntry {
                id: self,
                path: "/blog",
                title: "Blog",
                nav_label: Some("Blog"),
            },
            PageId::BlogVideo => PageEntry {
                id: self,
                path: "/blog/video",
                title: "Sunglasses Commercial",
                nav_label: None,
            },
            PageId::Contact => PageEntry {
                id: self,
                path: "/contact",
                title: "Contact",
                nav_label: Some("Contact"),
            },
        }
    }

    pub const fn path(self) -> &'static str {
        self.entry().path
    }

    pub const fn title(self) -> &'static str {
        self.entry().title
    }
}

/// All pages, in navigation order.
pub const PAGES: [PageEntry; 7] = [
    PageId::Home.entry(),
    PageId::About.entry(),
    PageId::Works.entry(),
    PageId::Gallery.entry(),
    PageId::Blog.entry(),
    PageId::BlogVideo.entry(),
    PageId::Contact.entry(),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("page {0:?} is registered more than once")]
    DuplicatePage(PageId),

    #[error("path {path:?} is claimed by both {first:?} and {second:?}")]
    DuplicatePath {
        path: &'static str,
        first: PageId,
        second: PageId,
    },

    #[error("path {path:?} for {page:?} must start with '/'")]
    RelativePath { path: &'static str, page: PageId },
}

/// Check a route table for duplicate pages and paths.
pub fn validate(entries: &[PageEntry]) -> Result<(), RegistryError> {
    let mut pages = HashSet::new();
    let mut paths: Vec<(&'static str, PageId)> = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.path.starts_with('/') {
            return Err(RegistryError::RelativePath {
                path: entry.path,
                page: entry.id,
            });
        }
        if !pages.insert(entry.id) {
            return Err(RegistryError::DuplicatePage(entry.id));
        }
        if let Some((_, first)) = paths.iter().find(|(path, _)| *path == entry.path) {
            return Err(RegistryError::DuplicatePath {
                path: entry.path,
                first: *first,
                second: entry.id,
            });
        }
        paths.push((entry.path, entry.id));
    }

    Ok(())
}

/// Exact-match an in-app path (base path already stripped).
pub fn match_path(path: &str) -> Option<PageId> {
    PAGES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.id)
}

/// Navbar links in display order.
pub fn nav_links() -> impl Iterator<Item = (PageId, &'static str)> {
    PAGES
        .iter()
        .filter_map(|entry| entry.nav_label.map(|label| (entry.id, label)))
}
