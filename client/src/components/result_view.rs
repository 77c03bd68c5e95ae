//! Terminal-style result box with staged sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `SimulationState` from context. Each section is derived through a
//! memo so revealing a later section, or editing the form, does not rebuild
//! (and retype) sections already on screen.

use leptos::prelude::*;

use crate::components::typed_line::TypedLine;
use crate::state::simulation::{RevealSection, SimulationState};
use crate::util::result_lines::{analysis_lines, bits_lines, error_lines, verdict_line};

/// Narration section content, resolved against the submitted strategy.
#[derive(Clone, Debug, PartialEq)]
struct NarrationBlock {
    narration: String,
    analysis: Option<(Vec<String>, &'static str)>,
}

fn narration_block(state: &SimulationState) -> Option<NarrationBlock> {
    let result = state.result()?;
    let strategy = state.submitted()?.eve_strategy;
    let analysis = result
        .eve_analysis
        .as_ref()
        .map(|a| (analysis_lines(a, strategy), verdict_line(a, strategy)));
    Some(NarrationBlock { narration: result.narration.clone(), analysis })
}

fn typed_lines(lines: Vec<String>) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| view! { <TypedLine text=line/> })
        .collect_view()
}

/// Result box shown once a run has succeeded.
#[component]
pub fn ResultView() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulationState>>();

    let has_result = Memo::new(move |_| sim.with(|s| s.result().is_some()));
    let bits = Memo::new(move |_| {
        sim.with(|s| s.result().filter(|_| s.is_visible(RevealSection::Bits)).map(bits_lines))
    });
    let errors = Memo::new(move |_| {
        sim.with(|s| s.result().filter(|_| s.is_visible(RevealSection::Errors)).map(error_lines))
    });
    let narration = Memo::new(move |_| {
        sim.with(|s| {
            if s.is_visible(RevealSection::Narration) { narration_block(s) } else { None }
        })
    });

    view! {
        <Show when=move || has_result.get()>
            <div class="terminal-box">
                {move || bits.get().map(|lines| view! { <div class="terminal-box__section">{typed_lines(lines)}</div> })}
                {move || {
                    errors
                        .get()
                        .map(|lines| {
                            view! {
                                <div class="terminal-box__section terminal-box__section--spaced">{typed_lines(lines)}</div>
                            }
                        })
                }}
                {move || {
                    narration
                        .get()
                        .map(|block| {
                            view! {
                                <div class="terminal-box__section terminal-box__section--spaced">
                                    <TypedLine text=block.narration/>
                                </div>
                                {block
                                    .analysis
                                    .map(|(lines, verdict)| {
                                        view! {
                                            <div class="terminal-box__analysis">
                                                {typed_lines(lines)}
                                                <TypedLine text=verdict cursor=true/>
                                            </div>
                                        }
                                    })}
                            }
                        })
                }}
            </div>
        </Show>
    }
}
