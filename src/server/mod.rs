//! Static host for the built client.
//!
//! Serves, under the configured base path:
//! - files from the built bundle (`dist_dir`): index.html, wasm, js
//! - files from the flat public asset directory (`public_dir`)
//! - the SPA document for any other location, so deep links and reloads
//!   land on the client router. Registered pages answer 200, anything else
//!   404 (the client renders its not-found page from the same document).
//!
//! A bundle built by `dx` declares its router mount in a
//! `<meta name="DIOXUS_ASSET_ROOT">` tag. The host refuses to start when that
//! differs from its own base path.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use tokio::signal;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::app::Route;
use crate::assets::BasePath;
use crate::config::{check_base_paths, ConfigError, ServerConfig, SiteConfig};

/// Meta tag name `dx` writes the router mount into.
const BASE_PATH_META: &str = dioxus::cli_config::ASSET_ROOT_ENV;

/// Shared state for the SPA fallback handler
#[derive(Clone)]
pub struct SpaState {
    pub site: SiteConfig,
    pub index_html: Arc<str>,
}

/// Build the host router for a config.
///
/// Fails when the bundle in `dist_dir` was built for another mount.
pub fn build_router(config: &ServerConfig) -> Result<Router, ConfigError> {
    let site = config.site();
    let index_html = load_index_html(&config.dist_dir, &site);
    match bundle_base_path(&index_html) {
        Some(bundle) => check_base_paths(&site.base_path, &bundle)?,
        None => tracing::debug!("bundle declares no base path, assuming {}", site.base_path),
    }

    let state = SpaState {
        index_html: index_html.into(),
        site: site.clone(),
    };

    let spa = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(false)
        .fallback(
            ServeDir::new(&config.public_dir)
                .append_index_html_on_directories(false)
                .fallback(get(spa_document).with_state::<()>(state)),
        );

    let router = if site.base_path.is_root() {
        Router::new().fallback_service(spa)
    } else {
        let target = format!("{}/", site.base_path);
        Router::new()
            .route(
                "/",
                get(move || {
                    let target = target.clone();
                    async move { Redirect::to(&target) }
                }),
            )
            .nest_service(site.base_path.as_str(), spa)
            .fallback(outside_mount)
    };

    Ok(router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Serve until Ctrl+C / SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let site = config.site();
    let app = build_router(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(
        mode = site.mode.as_str(),
        "Listening on http://{}{}",
        addr,
        site.base_path
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// GET {base}/* - SPA document for client-side routes
async fn spa_document(
    State(state): State<SpaState>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    let route = Route::from_location(uri.path(), &state.site.base_path);
    let status = match route.page() {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    };
    tracing::debug!(path = %uri.path(), ?route, %status, "serving SPA document");

    (status, Html(state.index_html.to_string()))
}

async fn outside_mount() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Read `index.html` from the bundle, or fall back to a generated shell.
fn load_index_html(dist_dir: &Path, site: &SiteConfig) -> String {
    let path = dist_dir.join("index.html");
    match std::fs::read_to_string(&path) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(
                "No client bundle at {} ({}), serving generated shell",
                path.display(),
                e
            );
            fallback_index_html(site)
        }
    }
}

/// Minimal document the WASM client mounts into (`#main`). The stylesheet
/// is added to the head by the client's shell.
pub fn fallback_index_html(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{meta}" content="{base}">
    <title>Shania Sunil</title>
</head>
<body>
    <div id="main"></div>
</body>
</html>
"#,
        meta = BASE_PATH_META,
        base = site.base_path.as_str().trim_start_matches('/'),
    )
}

/// Router mount a bundle's index.html was built for, if it declares one.
pub fn bundle_base_path(index_html: &str) -> Option<BasePath> {
    let marker = format!(r#"name="{}""#, BASE_PATH_META);
    let at = index_html.find(&marker)?;
    let start = index_html[..at].rfind('<')?;
    let end = at + index_html[at..].find('>')?;
    let (_, content) = index_html[start..end].split_once(r#"content=""#)?;
    let value = content.split('"').next()?;
    Some(BasePath::new(value))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
