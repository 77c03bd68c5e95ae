//! Simulation panel state: form inputs plus the run state machine.
//!
//! DESIGN
//! ======
//! A run moves `Idle -> Loading -> Revealing | Failed`. Every run is stamped
//! with a generation number carried by its [`RunTicket`]; completions and
//! reveal timers holding an older ticket are ignored, so the last run started
//! always owns the panel even though earlier tasks are never aborted.
//!
//! Reveal progress is a single ordered [`RevealSection`] high-water mark, which
//! keeps sections appearing strictly in order and never hiding again until the
//! next run.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use std::time::Duration;

use crate::net::api::SimulationError;
use crate::net::types::{EveStrategy, SimulationRequest, SimulationResult};

pub const MIN_QUBITS: u32 = 4;
pub const MAX_QUBITS: u32 = 64;
pub const DEFAULT_QUBITS: u32 = 16;

/// Result sections revealed one after another once a run succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealSection {
    /// Raw bit and basis rows.
    Bits,
    /// Error positions, error rate and the security verdict.
    Errors,
    /// Narration and the AI's strategy analysis.
    Narration,
}

impl RevealSection {
    /// All sections in reveal order.
    pub const ALL: [Self; 3] = [Self::Bits, Self::Errors, Self::Narration];

    /// Delay after a successful response before this section appears.
    #[must_use]
    pub fn delay(self) -> Duration {
        match self {
            Self::Bits => Duration::from_millis(500),
            Self::Errors => Duration::from_millis(1500),
            Self::Narration => Duration::from_millis(3000),
        }
    }
}

/// User-editable simulation parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationForm {
    pub num_bits: u32,
    pub eavesdrop: bool,
    pub eve_strategy: EveStrategy,
    /// `false` asks the backend for its canned analysis.
    pub use_real_ai: bool,
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_QUBITS,
            eavesdrop: true,
            eve_strategy: EveStrategy::Intermediate,
            use_real_ai: true,
        }
    }
}

impl SimulationForm {
    /// Apply raw text from the qubit-count input.
    pub fn set_num_bits_input(&mut self, raw: &str) {
        self.num_bits = coerce_qubit_count(raw);
    }

    /// Apply a raw select value; unknown values keep the current strategy.
    pub fn set_strategy_value(&mut self, raw: &str) {
        if let Some(strategy) = EveStrategy::from_value(raw) {
            self.eve_strategy = strategy;
        }
    }

    /// Snapshot the form as a request body.
    #[must_use]
    pub fn to_request(&self) -> SimulationRequest {
        SimulationRequest {
            num_bits: self.num_bits.clamp(MIN_QUBITS, MAX_QUBITS),
            eavesdrop: self.eavesdrop,
            eve_strategy: self.eve_strategy,
            use_mock: !self.use_real_ai,
        }
    }
}

/// Coerce qubit-count input text into `MIN_QUBITS..=MAX_QUBITS`.
///
/// Reads an optional sign and leading digits after leading whitespace, so
/// `"12abc"` is 12. Input with no leading digits counts as the minimum.
#[must_use]
pub fn coerce_qubit_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits_len == 0 {
        return MIN_QUBITS;
    }
    // Overlong digit strings saturate rather than fail.
    let value = rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX);
    u32::try_from(value).unwrap_or(u32::MAX).clamp(MIN_QUBITS, MAX_QUBITS)
}

/// Handle identifying one run. Stale tickets are rejected by the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTicket {
    generation: u64,
    request: SimulationRequest,
}

impl RunTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request body captured when the run started.
    #[must_use]
    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }
}

/// Where the panel is in its current run.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RunPhase {
    #[default]
    Idle,
    Loading,
    Revealing {
        result: SimulationResult,
        /// Parameters the result was produced with.
        request: SimulationRequest,
        /// Furthest section shown so far.
        shown: Option<RevealSection>,
    },
    Failed {
        message: String,
    },
}

/// Whole-panel state: form plus run lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
    pub form: SimulationForm,
    phase: RunPhase,
    generation: u64,
}

impl SimulationState {
    /// Start a new run, superseding any run in flight or mid-reveal.
    ///
    /// Clears the previous result or error and hides every section at once.
    pub fn begin_run(&mut self) -> RunTicket {
        self.generation += 1;
        self.phase = RunPhase::Loading;
        RunTicket { generation: self.generation, request: self.form.to_request() }
    }

    /// Whether `ticket` belongs to the latest run.
    #[must_use]
    pub fn is_current(&self, ticket: &RunTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Record the outcome of `ticket`'s request.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale or the
    /// run is no longer loading.
    pub fn complete(&mut self, ticket: &RunTicket, outcome: Result<SimulationResult, SimulationError>) -> bool {
        if !self.is_current(ticket) || self.phase != RunPhase::Loading {
            return false;
        }
        self.phase = match outcome {
            Ok(result) => RunPhase::Revealing { result, request: ticket.request, shown: None },
            Err(e) => RunPhase::Failed { message: e.display_message() },
        };
        true
    }

    /// Show `section` (and every section before it) for `ticket`'s run.
    ///
    /// Returns `true` only if something new became visible.
    pub fn reveal(&mut self, ticket: &RunTicket, section: RevealSection) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let RunPhase::Revealing { shown, .. } = &mut self.phase else {
            return false;
        };
        if matches!(*shown, Some(s) if s >= section) {
            return false;
        }
        *shown = Some(section);
        true
    }

    #[must_use]
    pub fn phase(&self) -> &RunPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == RunPhase::Loading
    }

    #[must_use]
    pub fn is_visible(&self, section: RevealSection) -> bool {
        matches!(&self.phase, RunPhase::Revealing { shown: Some(s), .. } if *s >= section)
    }

    #[must_use]
    pub fn result(&self) -> Option<&SimulationResult> {
        match &self.phase {
            RunPhase::Revealing { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Request the displayed result was produced with.
    #[must_use]
    pub fn submitted(&self) -> Option<&SimulationRequest> {
        match &self.phase {
            RunPhase::Revealing { request, .. } => Some(request),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            RunPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn run_button_label(&self) -> &'static str {
        if self.is_loading() { "Simulating..." } else { "Run BB84 Simulation" }
    }
}
