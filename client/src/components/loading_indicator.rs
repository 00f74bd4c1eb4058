//! Loading spinner with its status line.

use leptos::prelude::*;

use crate::state::indicator::IndicatorState;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let indicator = expect_context::<RwSignal<IndicatorState>>();

    view! {
        <div
            id="loading-spinner"
            class="loading-spinner"
            class:loading-spinner--visible=move || indicator.get().visible
            aria-live="polite"
        >
            <div class="loading-spinner__wheel" aria-hidden="true"></div>
            <span id="loading-message" class="loading-spinner__message">
                {move || indicator.get().message}
            </span>
        </div>
    }
}
