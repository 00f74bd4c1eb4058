//! Logs pane listing the backend's trace lines for the last answer.

use leptos::prelude::*;

use crate::state::panes::LogsState;

/// One `log-entry` row per line, scrolled to the newest line on refresh.
#[component]
pub fn LogsPane() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let logs_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = logs.with(|l| l.lines.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = logs_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div id="logs-window" class="logs-window" node_ref=logs_ref>
            {move || {
                logs.get()
                    .lines
                    .into_iter()
                    .map(|line| view! { <div class="log-entry">{line}</div> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
