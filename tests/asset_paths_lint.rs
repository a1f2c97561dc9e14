//! Asset path lint - pages must resolve asset URLs, never hard-code them.
//!
//! A literal `src: "/photo.jpeg"` works in development and breaks as soon as
//! the build is mounted under a subdirectory. This test scans page sources and
//! flags absolute `src`/`href` string literals.

use std::fs;
use walkdir::WalkDir;

/// Attribute prefixes that indicate a hard-coded absolute asset URL
const DISALLOWED_PATTERNS: &[&str] = &["src: \"/", "href: \"/", "src: \"{", "href: \"{"];

#[test]
fn lint_pages_resolve_assets() {
    let mut violations = Vec::new();

    for entry in WalkDir::new("src/app/pages")
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let src = fs::read_to_string(entry.path()).expect("Failed to read page source");
        for (line_no, line) in src.lines().enumerate() {
            for pattern in DISALLOWED_PATTERNS {
                if line.contains(pattern) {
                    violations.push(format!(
                        "{}:{}: {}",
                        entry.path().display(),
                        line_no + 1,
                        line.trim()
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Pages must build asset URLs with use_assets().resolve(..):\n{}",
        violations.join("\n")
    );
}

/// Pages embedding assets must go through the resolver context.
#[test]
fn lint_asset_pages_use_resolver() {
    for page in ["home.rs", "works.rs", "gallery.rs", "blog.rs", "contact.rs"] {
        let path = format!("src/app/pages/{}", page);
        let src = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", path));
        assert!(
            src.contains("use_assets()") && src.contains(".resolve("),
            "{} embeds assets but does not use the asset resolver",
            path
        );
    }
}
