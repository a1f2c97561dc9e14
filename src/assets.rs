//! Base-path aware static asset URLs.
//!
//! Every image, video and download on the site lives in one flat public
//! directory. In development it is served from `/`; a production build is
//! hosted under a subdirectory (e.g. `/myapp`) and every URL has to carry
//! that prefix. [`AssetResolver`] is the only place that prefix is applied.

use std::fmt;

/// URL prefix the whole application is mounted under.
///
/// Normalised to either `/` or `/segment[/segment...]` with no trailing slash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// The root mount (`/`), used in development.
    pub fn root() -> Self {
        BasePath("/".to_string())
    }

    /// Normalise a raw prefix: `"appname"`, `"/appname"` and `"/appname/"`
    /// all become `/appname`. Empty input is the root.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            BasePath(format!("/{}", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Append a relative path to the prefix.
    pub fn join(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches('/');
        if self.is_root() {
            format!("/{}", relative)
        } else {
            format!("{}/{}", self.0, relative)
        }
    }

    /// Strip the prefix from an absolute request path.
    ///
    /// Returns the in-app path (always starting with `/`), or `None` when the
    /// path lies outside the mount (`/other`, or `/appnamefoo` for `/appname`).
    pub fn strip_prefix<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return if path.is_empty() {
                Some("/")
            } else if path.starts_with('/') {
                Some(path)
            } else {
                None
            };
        }

        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps bare asset names to fetchable URLs under the session's base path.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AssetResolver {
    base: BasePath,
}

impl AssetResolver {
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve `name` (e.g. `"office.jpeg"`) to its URL.
    ///
    /// Names are passed through unescaped: `"cxo lounge.jpeg"` stays
    /// `".../cxo lounge.jpeg"` and the browser percent-encodes it when the
    /// attribute is fetched.
    pub fn resolve(&self, name: &str) -> String {
        self.base.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalisation() {
        assert_eq!(BasePath::new("").as_str(), "/");
        assert_eq!(BasePath::new("/").as_str(), "/");
        assert_eq!(BasePath::new("appname").as_str(), "/appname");
        assert_eq!(BasePath::new("/appname/").as_str(), "/appname");
        assert_eq!(BasePath::new(" /nested/app/ ").as_str(), "/nested/app");
        assert!(BasePath::default().is_root());
    }

    #[test]
    fn test_resolve_development_and_production() {
        let dev = AssetResolver::new(BasePath::root());
        let prod = AssetResolver::new(BasePath::new("/appname"));

        assert_eq!(dev.resolve("office.jpeg"), "/office.jpeg");
        assert_eq!(prod.resolve("office.jpeg"), "/appname/office.jpeg");
    }

    #[test]
    fn test_resolve_is_pure() {
        let resolver = AssetResolver::new(BasePath::new("/appname"));
        let first = resolver.resolve("RESUME 2025.pdf");
        let second = resolver.resolve("RESUME 2025.pdf");
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_change_only_changes_prefix() {
        let names = ["office.jpeg", "cxo lounge mr2.jpeg", "sunglasses_commercial.mp4"];
        let dev = AssetResolver::new(BasePath::root());
        let prod = AssetResolver::new(BasePath::new("/appname"));

        for name in names {
            let dev_url = dev.resolve(name);
            let prod_url = prod.resolve(name);
            assert!(dev_url.ends_with(name), "{dev_url} should end with {name}");
            assert!(prod_url.ends_with(name), "{prod_url} should end with {name}");
            assert_eq!(prod_url, format!("/appname{}", dev_url));
        }
    }

    #[test]
    fn test_resolve_keeps_spaces_unencoded() {
        let resolver = AssetResolver::new(BasePath::new("/appname"));
        assert_eq!(
            resolver.resolve("cxo lounge mr2.jpeg"),
            "/appname/cxo lounge mr2.jpeg"
        );
    }

    #[test]
    fn test_resolve_collapses_leading_separator() {
        let resolver = AssetResolver::new(BasePath::new("/appname"));
        assert_eq!(resolver.resolve("/office.jpeg"), "/appname/office.jpeg");
        let root = AssetResolver::new(BasePath::root());
        assert_eq!(root.resolve("/office.jpeg"), "/office.jpeg");
    }

    #[test]
    fn test_strip_prefix() {
        let base = BasePath::new("/appname");
        assert_eq!(base.strip_prefix("/appname"), Some("/"));
        assert_eq!(base.strip_prefix("/appname/"), Some("/"));
        assert_eq!(base.strip_prefix("/appname/blog/video"), Some("/blog/video"));
        assert_eq!(base.strip_prefix("/appnamefoo"), None);
        assert_eq!(base.strip_prefix("/contact"), None);

        let root = BasePath::root();
        assert_eq!(root.strip_prefix("/contact"), Some("/contact"));
        assert_eq!(root.strip_prefix(""), Some("/"));
    }
}
