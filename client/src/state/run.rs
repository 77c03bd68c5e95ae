//! Run driver: await the backend, record the outcome, then step through the
//! staged reveal.
//!
//! DESIGN
//! ======
//! The reveal clock is an injected sleep function. The browser passes a real
//! timer; tests pass a recording fake, so the schedule itself is exercised
//! without a reactive runtime. Sections are revealed one after another with
//! sleeps measured from the moment the result was recorded.

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use super::simulation::{RevealSection, RunTicket, SimulationState};
use crate::net::api::SimulationService;

/// Holder of the panel state a run writes through.
pub trait RunTarget {
    /// Apply `f` to the state. Observers are notified only when `f` returns
    /// `true`. Returns `false` when nothing changed or the state is gone.
    fn apply(&self, f: impl FnOnce(&mut SimulationState) -> bool) -> bool;
}

impl RunTarget for RwSignal<SimulationState> {
    fn apply(&self, f: impl FnOnce(&mut SimulationState) -> bool) -> bool {
        let mut changed = false;
        self.maybe_update(|s| {
            changed = f(s);
            changed
        });
        changed
    }
}

/// How a driven run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEnd {
    /// A newer run took over before this one finished.
    Superseded,
    /// The request failed; only the error message is shown.
    Failed,
    /// Every section is visible.
    Revealed,
}

/// Drive `ticket`'s run to completion against `target`.
///
/// Stops at the first write the state rejects, so a newer run silently wins
/// over this one at any point.
pub async fn drive<T, S, F>(target: &T, service: &dyn SimulationService, ticket: RunTicket, sleep: S) -> RunEnd
where
    T: RunTarget,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let outcome = service.simulate(ticket.request()).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("bb84 run {} failed: {e}", ticket.generation());
    }
    let succeeded = outcome.is_ok();
    if !target.apply(|s| s.complete(&ticket, outcome)) {
        leptos::logging::log!("bb84 run {} superseded", ticket.generation());
        return RunEnd::Superseded;
    }
    if !succeeded {
        return RunEnd::Failed;
    }

    let mut elapsed = Duration::ZERO;
    for section in RevealSection::ALL {
        sleep(section.delay().saturating_sub(elapsed)).await;
        elapsed = section.delay();
        if !target.apply(|s| s.reveal(&ticket, section)) {
            leptos::logging::log!("bb84 run {} superseded during reveal", ticket.generation());
            return RunEnd::Superseded;
        }
    }
    RunEnd::Revealed
}
