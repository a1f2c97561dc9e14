//! Portfolio Shell
//!
//! With the `server` feature this binary hosts the built client bundle and the
//! public assets. With `web` it is the WASM client itself.

#[cfg(feature = "server")]
use portfolio_shell::{app::registry, config, server};

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_shell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio Shell v{}", env!("CARGO_PKG_VERSION"));

    // Refuse to start on a broken route table
    registry::validate(&registry::PAGES)?;

    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    server::serve(config).await
}

#[cfg(not(feature = "server"))]
fn main() {
    if let Err(e) = portfolio_shell::app::registry::validate(&portfolio_shell::app::registry::PAGES)
    {
        tracing::error!("Invalid page registry: {}", e);
        return;
    }

    dioxus::launch(portfolio_shell::app::App);
}
