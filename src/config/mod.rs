//! Configuration management
//!
//! Two layers:
//! - [`SiteConfig`]: deployment mode, base path and theme persistence, baked
//!   into the bundle by `build.rs` so the WASM client needs no runtime lookup.
//! - [`ServerConfig`] (server feature): port and directories for the static
//!   host, loaded from an optional config file and `PORTFOLIO_*` env vars.
//!
//! The router's mount prefix and the asset base path must be one value.
//! On the client [`SiteConfig::aligned_with`] adopts the prefix the router
//! history was given; on the host [`check_base_paths`] refuses a bundle
//! built for a different mount.

use thiserror::Error;

use crate::assets::BasePath;

/// Base path used by production builds when none is configured.
pub const DEFAULT_PRODUCTION_BASE_PATH: &str = "/myapp";

/// Development serves from the root, production from a subdirectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(DeploymentMode::Development),
            "production" | "prod" => Some(DeploymentMode::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Development => "development",
            DeploymentMode::Production => "production",
        }
    }

    /// Mode this binary was built for (`PORTFOLIO_ENV`, injected by build.rs).
    pub fn from_build() -> Self {
        Self::parse(env!("PORTFOLIO_ENV")).unwrap_or(if cfg!(debug_assertions) {
            DeploymentMode::Development
        } else {
            DeploymentMode::Production
        })
    }
}

/// Settings resolved once at startup and constant for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub mode: DeploymentMode,
    pub base_path: BasePath,
    /// Keep the theme in localStorage across reloads (WASM only)
    pub persist_theme: bool,
}

impl SiteConfig {
    /// Development always mounts at `/`; production uses `production_base`.
    pub fn for_mode(mode: DeploymentMode, production_base: &str, persist_theme: bool) -> Self {
        let base_path = match mode {
            DeploymentMode::Development => BasePath::root(),
            DeploymentMode::Production => BasePath::new(production_base),
        };
        Self {
            mode,
            base_path,
            persist_theme,
        }
    }

    /// Settings baked in at compile time.
    pub fn from_build() -> Self {
        Self::for_mode(
            DeploymentMode::from_build(),
            env!("PORTFOLIO_BASE_PATH"),
            parse_flag(env!("PORTFOLIO_PERSIST_THEME")),
        )
    }

    /// Adopt the prefix the router is mounted under (`dioxus::cli_config::base_path()`),
    /// so asset URLs and routes share one base path.
    pub fn aligned_with(mut self, mounted: Option<&str>) -> Self {
        let Some(mounted) = mounted else {
            return self;
        };
        let mounted = BasePath::new(mounted);
        if mounted != self.base_path {
            tracing::warn!(
                baked = %self.base_path,
                router = %mounted,
                "asset base path differs from router mount, using the router's"
            );
            self.base_path = mounted;
        }
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host mounts at {host} but the client bundle was built for {bundle}")]
    BasePathMismatch { host: BasePath, bundle: BasePath },
}

/// Host and bundle must agree on the mount, or every asset and route 404s.
pub fn check_base_paths(host: &BasePath, bundle: &BasePath) -> Result<(), ConfigError> {
    if host == bundle {
        Ok(())
    } else {
        Err(ConfigError::BasePathMismatch {
            host: host.clone(),
            bundle: bundle.clone(),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1" | "yes")
}

#[cfg(feature = "server")]
pub use server::{get_config_dir, load_config, ServerConfig};

#[cfg(feature = "server")]
mod server {
    use std::path::PathBuf;

    use anyhow::Result;
    use serde::Deserialize;

    use super::{DeploymentMode, SiteConfig, DEFAULT_PRODUCTION_BASE_PATH};

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        #[serde(default = "default_port")]
        pub port: u16,

        #[serde(default = "default_host")]
        pub host: String,

        /// "development" or "production"; falls back to the build's mode
        #[serde(default)]
        pub env: Option<String>,

        /// Production mount point; falls back to the build's base path
        #[serde(default)]
        pub base_path: Option<String>,

        /// Built client bundle (index.html, wasm, js)
        #[serde(default = "default_dist_dir")]
        pub dist_dir: PathBuf,

        /// Flat directory of images, video and the CV
        #[serde(default = "default_public_dir")]
        pub public_dir: PathBuf,
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_dist_dir() -> PathBuf {
        PathBuf::from("dist")
    }

    fn default_public_dir() -> PathBuf {
        PathBuf::from("public")
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                port: default_port(),
                host: default_host(),
                env: None,
                base_path: None,
                dist_dir: default_dist_dir(),
                public_dir: default_public_dir(),
            }
        }
    }

    impl ServerConfig {
        /// Site settings as seen by the host. Runtime values win over the
        /// build so one binary can be re-mounted without rebuilding.
        pub fn site(&self) -> SiteConfig {
            let build = SiteConfig::from_build();
            let mode = self
                .env
                .as_deref()
                .and_then(DeploymentMode::parse)
                .unwrap_or(build.mode);
            let production_base = match self.base_path.as_deref() {
                Some(base) => base.to_string(),
                None if build.base_path.is_root() => DEFAULT_PRODUCTION_BASE_PATH.to_string(),
                None => build.base_path.to_string(),
            };
            SiteConfig::for_mode(mode, &production_base, build.persist_theme)
        }
    }

    /// Get config directory (PORTFOLIO_CONFIG_DIR or the working directory)
    pub fn get_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        PathBuf::from(".")
    }

    pub fn load_config() -> Result<ServerConfig> {
        let config_dir = get_config_dir();

        let mut builder = ::config::Config::builder()
            // Start with defaults
            .set_default("port", default_port() as i64)?
            // Load from config file if it exists
            .add_source(
                ::config::File::with_name(&config_dir.join("portfolio").to_string_lossy())
                    .required(false),
            )
            // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_BASE_PATH, etc.)
            .add_source(
                ::config::Environment::with_prefix("PORTFOLIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // Port precedence: PORTFOLIO_PORT > PORT > config > default
        if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        } else if let Ok(port) = std::env::var("PORT") {
            // Common PaaS convention
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }

        let config = builder.build()?;

        Ok(config.try_deserialize()?)
    }
}
