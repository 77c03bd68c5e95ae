//! Simulation form, run trigger, and result area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the only network interaction in the client: one `POST /api/bb84` per
//! click. The run lifecycle lives in `SimulationState`; this component wires
//! DOM events to it and hands each run to [`crate::state::run::drive`] with a
//! browser timer.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::result_view::ResultView;
use crate::net::api::SimulationService;
use crate::net::types::EveStrategy;
use crate::state::simulation::{MAX_QUBITS, MIN_QUBITS, SimulationState};

/// Parameter form plus the staged result view.
#[component]
pub fn SimulationPanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulationState>>();
    let service = expect_context::<Arc<dyn SimulationService>>();

    let on_run = move |_| {
        let Some(ticket) = sim.try_update(SimulationState::begin_run) else {
            return;
        };
        leptos::logging::log!("bb84 run {} started: {:?}", ticket.generation(), ticket.request());

        #[cfg(feature = "hydrate")]
        {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                crate::state::run::drive(&sim, service.as_ref(), ticket, gloo_timers::future::sleep).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &service;
    };

    let error = Memo::new(move |_| sim.with(|s| s.error_message().map(str::to_owned)));

    view! {
        <div class="simulation-panel">
            <label class="field field--inline">
                <input
                    type="checkbox"
                    class="checkbox-field"
                    prop:checked=move || sim.with(|s| !s.form.use_real_ai)
                    on:change=move |ev| {
                        let use_mock = event_target_checked(&ev);
                        sim.update(|s| s.form.use_real_ai = !use_mock);
                    }
                />
                "Use Mock AI (No token usage)"
            </label>

            <label class="field">
                "Number of Qubits:"
                <input
                    type="number"
                    class="input-field"
                    min=MIN_QUBITS.to_string()
                    max=MAX_QUBITS.to_string()
                    prop:value=move || sim.with(|s| s.form.num_bits.to_string())
                    on:input=move |ev| sim.update(|s| s.form.set_num_bits_input(&event_target_value(&ev)))
                />
            </label>

            <label class="field field--inline">
                <input
                    type="checkbox"
                    class="checkbox-field"
                    prop:checked=move || sim.with(|s| s.form.eavesdrop)
                    on:change=move |ev| {
                        let enabled = event_target_checked(&ev);
                        sim.update(|s| s.form.eavesdrop = enabled);
                    }
                />
                "Enable Eve (eavesdropper)"
            </label>

            <label class="field">
                "Eve's Strategy:"
                <select
                    class="select-field"
                    on:change=move |ev| sim.update(|s| s.form.set_strategy_value(&event_target_value(&ev)))
                >
                    {EveStrategy::ALL
                        .into_iter()
                        .map(|strategy| {
                            view! {
                                <option
                                    value=strategy.as_str()
                                    prop:selected=move || sim.with(|s| s.form.eve_strategy == strategy)
                                >
                                    {strategy.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <button class="button" on:click=on_run disabled=move || sim.with(SimulationState::is_loading)>
                {move || sim.with(SimulationState::run_button_label)}
            </button>

            {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

            <ResultView/>
        </div>
    }
}
