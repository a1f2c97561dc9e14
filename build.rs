//! Build script to bake the deployment settings into the bundle.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - PORTFOLIO_ENV: "development" or "production" (defaults from the cargo profile)
//! - PORTFOLIO_BASE_PATH: subdirectory the production build is served from.
//!   Defaults to the router's mount: `DIOXUS_ASSET_ROOT` when built by `dx`,
//!   else `base_path` in Dioxus.toml, else /myapp
//! - PORTFOLIO_PERSIST_THEME: "true" to keep the theme in localStorage (defaults to false)

fn main() {
    // Deployment mode: prefer PORTFOLIO_ENV, fall back to the cargo profile
    let env = std::env::var("PORTFOLIO_ENV").unwrap_or_else(|_| {
        match std::env::var("PROFILE").as_deref() {
            Ok("release") => "production".into(),
            _ => "development".into(),
        }
    });
    println!("cargo:rustc-env=PORTFOLIO_ENV={}", env);

    let base_path = std::env::var("PORTFOLIO_BASE_PATH")
        .or_else(|_| std::env::var("DIOXUS_ASSET_ROOT"))
        .ok()
        .or_else(dioxus_toml_base_path)
        .unwrap_or_else(|| "/myapp".into());
    println!("cargo:rustc-env=PORTFOLIO_BASE_PATH={}", base_path);

    let persist = std::env::var("PORTFOLIO_PERSIST_THEME").unwrap_or_else(|_| "false".into());
    println!("cargo:rustc-env=PORTFOLIO_PERSIST_THEME={}", persist);

    // Rebuild if these change
    println!("cargo:rerun-if-env-changed=PORTFOLIO_ENV");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_BASE_PATH");
    println!("cargo:rerun-if-env-changed=DIOXUS_ASSET_ROOT");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_PERSIST_THEME");
    println!("cargo:rerun-if-changed=Dioxus.toml");
}

/// `base_path = "..."` from Dioxus.toml, the value `dx` hands the router.
fn dioxus_toml_base_path() -> Option<String> {
    let manifest = std::fs::read_to_string("Dioxus.toml").ok()?;
    manifest.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        if key.trim() != "base_path" {
            return None;
        }
        Some(value.trim().trim_matches('"').to_string())
    })
}
