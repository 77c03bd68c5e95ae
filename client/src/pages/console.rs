//! Landing page hosting the BB84 simulation panel.

use leptos::prelude::*;

use crate::components::simulation_panel::SimulationPanel;

#[component]
pub fn ConsolePage() -> impl IntoView {
    view! {
        <div class="app-container">
            <h1>"Quantum Key Distribution (BB84) Hacker Detection with AI"</h1>
            <SimulationPanel/>
        </div>
    }
}
