//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text helpers kept out of components so formatting and typing rules
//! are testable without a browser.

pub mod result_lines;
pub mod typewriter;
