//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `SimulationState` signal from Leptos
//! context; pure formatting lives in `util`.

pub mod result_view;
pub mod simulation_panel;
pub mod typed_line;
