use super::*;
use crate::net::api::SimulationError;
use crate::net::types::{SimulationRequest, SimulationResult, Symbol};
use std::cell::{Cell, RefCell};
use std::future::{Ready, ready};
use std::sync::Mutex;

// =========================================================================
// Fakes
// =========================================================================

impl RunTarget for RefCell<SimulationState> {
    fn apply(&self, f: impl FnOnce(&mut SimulationState) -> bool) -> bool {
        f(&mut self.borrow_mut())
    }
}

struct MockService {
    replies: Mutex<Vec<Result<SimulationResult, SimulationError>>>,
}

impl MockService {
    fn new(replies: Vec<Result<SimulationResult, SimulationError>>) -> Self {
        Self { replies: Mutex::new(replies) }
    }
}

#[async_trait::async_trait(?Send)]
impl SimulationService for MockService {
    async fn simulate(&self, _request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Err(SimulationError::Request(String::new()))
        } else {
            replies.remove(0)
        }
    }
}

fn sample_result() -> SimulationResult {
    SimulationResult {
        alice_bits: vec![Symbol::Number(1), Symbol::Number(0)],
        alice_bases: vec![Symbol::Text("+".to_owned()), Symbol::Text("x".to_owned())],
        eve_bases: vec![Symbol::Text("+".to_owned()), Symbol::Text("+".to_owned())],
        bob_bases: vec![Symbol::Text("+".to_owned()), Symbol::Text("x".to_owned())],
        bob_bits: vec![Symbol::Number(1), Symbol::Number(1)],
        error_positions: vec![1],
        error_rate: 50.0,
        is_secure: false,
        narration: "Eve was here.".to_owned(),
        matching_indices: None,
        eve_analysis: None,
    }
}

fn visible(state: &SimulationState) -> Vec<RevealSection> {
    RevealSection::ALL.into_iter().filter(|s| state.is_visible(*s)).collect()
}

/// Records each requested sleep with the sections visible when it started.
fn recording_sleep<'a>(
    state: &'a RefCell<SimulationState>,
    sleeps: &'a RefCell<Vec<(Duration, Vec<RevealSection>)>>,
) -> impl Fn(Duration) -> Ready<()> + 'a {
    move |d| {
        sleeps.borrow_mut().push((d, visible(&state.borrow())));
        ready(())
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =========================================================================
// Schedule
// =========================================================================

#[test]
fn success_reveals_each_section_only_after_its_delay() {
    let svc = MockService::new(vec![Ok(sample_result())]);
    let state = RefCell::new(SimulationState::default());
    let ticket = state.borrow_mut().begin_run();
    let sleeps = RefCell::new(Vec::new());

    let end = futures::executor::block_on(drive(&state, &svc, ticket, recording_sleep(&state, &sleeps)));
    assert_eq!(end, RunEnd::Revealed);

    let sleeps = sleeps.into_inner();
    let waited: Vec<Duration> = sleeps.iter().map(|(d, _)| *d).collect();
    assert_eq!(waited, vec![ms(500), ms(1000), ms(1500)]);

    // Cumulative waits line up with each section's delay.
    let mut elapsed = Duration::ZERO;
    for ((d, _), section) in sleeps.iter().zip(RevealSection::ALL) {
        elapsed += *d;
        assert_eq!(elapsed, section.delay());
    }

    // Nothing is visible before its wait has finished.
    assert!(sleeps[0].1.is_empty());
    assert_eq!(sleeps[1].1, vec![RevealSection::Bits]);
    assert_eq!(sleeps[2].1, vec![RevealSection::Bits, RevealSection::Errors]);
    assert_eq!(visible(&state.borrow()), RevealSection::ALL.to_vec());
}

#[test]
fn failure_shows_message_without_waiting() {
    let svc = MockService::new(vec![Err(SimulationError::Remote("model offline".to_owned()))]);
    let state = RefCell::new(SimulationState::default());
    let ticket = state.borrow_mut().begin_run();
    let sleeps = RefCell::new(Vec::new());

    let end = futures::executor::block_on(drive(&state, &svc, ticket, recording_sleep(&state, &sleeps)));
    assert_eq!(end, RunEnd::Failed);
    assert!(sleeps.borrow().is_empty());
    assert_eq!(state.borrow().error_message(), Some("model offline"));
    assert!(visible(&state.borrow()).is_empty());
}

// =========================================================================
// Preemption
// =========================================================================

#[test]
fn completion_for_older_ticket_is_dropped() {
    let svc = MockService::new(vec![Ok(sample_result())]);
    let state = RefCell::new(SimulationState::default());
    let first = state.borrow_mut().begin_run();
    state.borrow_mut().begin_run();
    let sleeps = RefCell::new(Vec::new());

    let end = futures::executor::block_on(drive(&state, &svc, first, recording_sleep(&state, &sleeps)));
    assert_eq!(end, RunEnd::Superseded);
    assert!(sleeps.borrow().is_empty());
    assert!(state.borrow().is_loading());
    assert!(state.borrow().result().is_none());
}

#[test]
fn new_run_mid_reveal_stops_remaining_sections() {
    let svc = MockService::new(vec![Ok(sample_result())]);
    let state = RefCell::new(SimulationState::default());
    let ticket = state.borrow_mut().begin_run();
    let calls = Cell::new(0);
    let sleep = |_d: Duration| {
        calls.set(calls.get() + 1);
        if calls.get() == 2 {
            state.borrow_mut().begin_run();
        }
        ready(())
    };

    let end = futures::executor::block_on(drive(&state, &svc, ticket, sleep));
    assert_eq!(end, RunEnd::Superseded);
    assert_eq!(calls.get(), 2);
    assert!(state.borrow().is_loading());
    assert!(visible(&state.borrow()).is_empty());
}
