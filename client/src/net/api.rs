//! HTTP access to the external BB84 simulation endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the service reports itself unavailable, since runs are
//! only ever triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, undecodable bodies and the backend's own `error` field
//! all collapse into [`SimulationError`], which the panel renders as a single
//! message line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{SimulationReply, SimulationRequest, SimulationResult};

/// Backend origin used when `BB84_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong.";

/// Errors produced by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The request could not be built or sent.
    #[error("{0}")]
    Request(String),

    /// Non-success status with a body that is not a recognised payload.
    #[error("request failed: {0}")]
    Status(u16),

    /// The body was neither a result nor a failure payload.
    #[error("{0}")]
    Decode(String),

    /// The backend answered with an explicit `error` field.
    #[error("{0}")]
    Remote(String),
}

impl SimulationError {
    /// Message to show in the panel, falling back to a generic line when the
    /// error text is blank.
    #[must_use]
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() { FALLBACK_ERROR_MESSAGE.to_owned() } else { msg }
    }
}

/// Capability to run one simulation. Enables a fake backend in tests.
#[async_trait(?Send)]
pub trait SimulationService: Send + Sync {
    /// Submit `request` and wait for the backend's answer.
    ///
    /// # Errors
    ///
    /// Returns a [`SimulationError`] if the request fails, the response is
    /// malformed, or the backend reports an error.
    async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError>;
}

/// [`SimulationService`] backed by `POST {base}/api/bb84`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSimulationService {
    base_url: String,
}

impl HttpSimulationService {
    /// Build a service for the given origin. A trailing `/` is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build a service for the origin baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(configured_api_base())
    }

    /// Full endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        simulation_endpoint(&self.base_url)
    }
}

#[async_trait(?Send)]
impl SimulationService for HttpSimulationService {
    async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint())
                .json(request)
                .map_err(|e| SimulationError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| SimulationError::Request(e.to_string()))?;
            let status = resp.status();
            let ok = resp.ok();
            let body = resp
                .text()
                .await
                .map_err(|e| SimulationError::Decode(e.to_string()))?;
            decode_response(ok, status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(SimulationError::Request("not available on server".to_owned()))
        }
    }
}

/// Origin from `BB84_API_BASE` at build time, or [`DEFAULT_API_BASE`].
#[must_use]
pub fn configured_api_base() -> &'static str {
    option_env!("BB84_API_BASE")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

fn simulation_endpoint(base_url: &str) -> String {
    format!("{}/api/bb84", base_url.trim_end_matches('/'))
}

/// Interpret a response body.
///
/// A recognisable payload is honoured whatever the status, so backend error
/// bodies on 4xx/5xx still surface their message. Otherwise a non-success
/// status wins over the parse error.
///
/// # Errors
///
/// Returns [`SimulationError::Remote`] for an `error` payload,
/// [`SimulationError::Status`] for an unrecognised non-success body, and
/// [`SimulationError::Decode`] for an unrecognised success body.
pub fn decode_response(ok: bool, status: u16, body: &str) -> Result<SimulationResult, SimulationError> {
    match serde_json::from_str::<SimulationReply>(body) {
        Ok(SimulationReply::Success(result)) => Ok(*result),
        Ok(SimulationReply::Failure(failure)) => Err(SimulationError::Remote(failure.error)),
        Err(_) if !ok => Err(SimulationError::Status(status)),
        Err(e) => Err(SimulationError::Decode(e.to_string())),
    }
}
