//! Wire DTOs for the `/api/bb84` simulation endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads. Result fields the UI does not
//! render are ignored on decode so backend additions never break the panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Eavesdropper strategy simulated by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EveStrategy {
    /// Always measures in the `+` basis.
    Beginner,
    /// Picks a random basis per qubit.
    #[default]
    Intermediate,
    /// Mimics Alice's basis most of the time.
    Expert,
}

impl EveStrategy {
    /// All strategies in select-list order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Wire / select value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner (always +)",
            Self::Intermediate => "Intermediate (random)",
            Self::Expert => "Expert (mimics Alice)",
        }
    }

    /// Parse a select value. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Request body for `POST /api/bb84`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of qubits Alice sends (at least 4).
    pub num_bits: u32,
    /// Whether Eve intercepts the channel.
    pub eavesdrop: bool,
    /// Strategy Eve uses when eavesdropping.
    pub eve_strategy: EveStrategy,
    /// Ask the backend for a canned analysis instead of calling the model.
    pub use_mock: bool,
}

/// A bit or basis symbol as sent by the backend (`0`/`1` or `"+"`/`"x"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Number(i64),
    Text(String),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The AI's guess at Eve's strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveAnalysis {
    pub strategy_guess: String,
    pub justification: String,
}

impl EveAnalysis {
    /// Whether the guess names `actual`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn detects(&self, actual: EveStrategy) -> bool {
        self.strategy_guess.trim().eq_ignore_ascii_case(actual.as_str())
    }
}

/// Successful simulation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub alice_bits: Vec<Symbol>,
    pub alice_bases: Vec<Symbol>,
    pub eve_bases: Vec<Symbol>,
    pub bob_bases: Vec<Symbol>,
    pub bob_bits: Vec<Symbol>,
    pub error_positions: Vec<u32>,
    /// Percentage of sifted bits that disagree.
    pub error_rate: f64,
    pub is_secure: bool,
    #[serde(default)]
    pub narration: String,
    /// Positions where Alice's and Bob's bases agree (the sifted key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_indices: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eve_analysis: Option<EveAnalysis>,
}

/// Failure payload: `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FailureBody {
    pub error: String,
}

/// Either shape the endpoint may return. An `error` field wins over result
/// fields, so `Failure` is tried first.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SimulationReply {
    Failure(FailureBody),
    Success(Box<SimulationResult>),
}
