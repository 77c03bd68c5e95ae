//! Client application state.
//!
//! DESIGN
//! ======
//! State types are plain structs held in a single `RwSignal` and provided via
//! context, so transitions stay testable without a reactive runtime.

pub mod run;
pub mod simulation;
