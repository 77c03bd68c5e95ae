//! Server configuration parsed from environment variables.
//!
//! Leptos options (site root, pkg dir, default address) come from
//! `get_configuration`; this module layers the deployment overrides on top.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Config(String),

    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Resolve the bind address.
///
/// - `PORT`: when set, bind `0.0.0.0:<PORT>` (container deployments)
/// - otherwise the Leptos `site-addr`
pub fn bind_addr(port: Option<&str>, site_addr: SocketAddr) -> Result<SocketAddr, ServerError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(site_addr);
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ServerError::InvalidPort(raw.to_owned()))?;
    Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
}

/// Bind address from the process environment.
pub fn bind_addr_from_env(site_addr: SocketAddr) -> Result<SocketAddr, ServerError> {
    bind_addr(std::env::var("PORT").ok().as_deref(), site_addr)
}
