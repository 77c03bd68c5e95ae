//! Single line of text that types itself out.
//!
//! In the browser a local task advances one character every
//! [`TYPE_SPEED_MS`](crate::util::typewriter::TYPE_SPEED_MS). Server renders
//! show the whole line.

use leptos::prelude::*;

use crate::util::result_lines::VERDICT_CURSOR;
use crate::util::typewriter::typed_prefix;

#[component]
pub fn TypedLine(
    #[prop(into)] text: String,
    /// Show a block cursor after the line.
    #[prop(optional)]
    cursor: bool,
) -> impl IntoView {
    let initial = if cfg!(feature = "hydrate") { 0 } else { usize::MAX };
    let typed = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::typewriter::{TYPE_SPEED_MS, is_complete};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let target = text.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TYPE_SPEED_MS))).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                typed.update(|n| *n += 1);
                if is_complete(&target, typed.get_untracked()) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="typed-line">
            {move || typed_prefix(&text, typed.get()).to_owned()}
            {cursor.then(|| view! { <span class="typed-line__cursor">{VERDICT_CURSOR}</span> })}
        </div>
    }
}
