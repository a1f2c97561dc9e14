//! Portfolio Shell - Rust Implementation
//!
//! A personal portfolio single-page application.
//!
//! This library provides:
//! - Client-side routing over a fixed page registry (Dioxus router)
//! - A tab-wide light/dark theme store
//! - Base-path aware asset URLs for development and subdirectory deployments
//! - A static host that serves the built bundle with SPA fallback (server feature)

pub mod app;
pub mod assets;
pub mod config;
#[cfg(feature = "server")]
pub mod server;
