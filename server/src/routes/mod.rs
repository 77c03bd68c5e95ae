//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe and stitches Leptos SSR rendering plus the compiled
//! WASM/CSS bundle under a single Axum router. The simulation backend is a
//! separate service the browser calls directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use bb84_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-UI routes.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend: API routes + SSR pages + static `/pkg` assets.
pub fn leptos_app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root pkg directory.
    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    let pkg_route = format!("/{}", leptos_options.site_pkg_dir.trim_matches('/'));

    api_routes()
        .merge(leptos_router)
        .nest_service(&pkg_route, ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
