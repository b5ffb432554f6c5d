//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering, the compiled WASM/CSS bundle under `/pkg`
//! and a liveness probe into a single Axum router. Any other path is served
//! from the site root when a file exists there; otherwise the Leptos shell is
//! rendered and its router shows the "Page not found." view with a 404.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(router(conf.leptos_options))
}

/// Build the router for already-resolved Leptos options.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    // Compiled WASM, JS glue and stylesheet.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();
    let pkg_service = ServeDir::new(site_root.join(&pkg_dir));

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service(&format!("/{pkg_dir}"), pkg_service)
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
