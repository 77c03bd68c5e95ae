//! Text lines for each revealed result section.
//!
//! The result view renders these verbatim through the typewriter, so all
//! label padding and joining lives here.

#[cfg(test)]
#[path = "result_lines_test.rs"]
mod result_lines_test;

use crate::net::types::{EveAnalysis, EveStrategy, SimulationResult, Symbol};

/// Block cursor shown after the final verdict line.
pub const VERDICT_CURSOR: &str = "\u{2588}";

/// Width labels in the bits section are padded to.
const BITS_LABEL_WIDTH: usize = 16;

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn symbol_row(label: &str, symbols: &[Symbol]) -> String {
    format!("{label:<width$}{}", join_symbols(symbols), width = BITS_LABEL_WIDTH)
}

/// Alice/Eve/Bob bit and basis rows.
#[must_use]
pub fn bits_lines(result: &SimulationResult) -> Vec<String> {
    vec![
        symbol_row("Alice Bits:", &result.alice_bits),
        symbol_row("Alice Bases:", &result.alice_bases),
        symbol_row("Eve Bases:", &result.eve_bases),
        symbol_row("Bob Bases:", &result.bob_bases),
        symbol_row("Bob Bits:", &result.bob_bits),
    ]
}

/// Error positions, rate, verdict, and sifted key length when known.
#[must_use]
pub fn error_lines(result: &SimulationResult) -> Vec<String> {
    let positions = result
        .error_positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![
        format!("Error Positions: {positions}"),
        format!("Error Rate: {}%", result.error_rate),
        format!("Secure? {}", if result.is_secure { "YES" } else { "NO" }),
    ];
    if let Some(matching) = &result.matching_indices {
        lines.push(format!("Sifted Key Length: {}", matching.len()));
    }
    lines
}

/// Lines describing the AI's guess against the strategy actually used.
#[must_use]
pub fn analysis_lines(analysis: &EveAnalysis, actual: EveStrategy) -> Vec<String> {
    vec![
        format!("AI Guess: {}", analysis.strategy_guess),
        format!("Justification: {}", analysis.justification),
        format!("True Strategy: {}", actual.as_str().to_ascii_uppercase()),
    ]
}

#[must_use]
pub fn verdict_line(analysis: &EveAnalysis, actual: EveStrategy) -> &'static str {
    if analysis.detects(actual) { "AI detected Eve's strategy!" } else { "AI was fooled by Eve." }
}
