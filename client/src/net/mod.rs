//! Networking modules for the simulation endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP call and error mapping, `types` defines the wire
//! schema shared with the backend.

pub mod api;
pub mod types;
