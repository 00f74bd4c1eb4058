//! Results pane showing the rendered database response.

use leptos::prelude::*;

use crate::state::panes::ResultsState;

#[component]
pub fn ResultsPane() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    view! {
        <div
            id="results-window"
            class="results-window"
            class:results-window--empty=move || results.get().is_empty()
            inner_html=move || results.get().html
        ></div>
    }
}
