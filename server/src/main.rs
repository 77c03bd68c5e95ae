#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerError;
use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "bb84 console stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config::bind_addr_from_env(leptos_options.site_addr)?;

    let app = routes::leptos_app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, api_base = bb84_client::net::api::configured_api_base(), "bb84 console listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
