//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::{HttpSimulationService, SimulationService};
use crate::pages::console::ConsolePage;
use crate::state::simulation::SimulationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the simulation state and backend service, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sim = RwSignal::new(SimulationState::default());
    let service: Arc<dyn SimulationService> = Arc::new(HttpSimulationService::from_build_env());

    provide_context(sim);
    provide_context(service);

    view! {
        <Stylesheet id="leptos" href="/pkg/bb84-console.css"/>
        <Title text="BB84 Hacker Detection"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
