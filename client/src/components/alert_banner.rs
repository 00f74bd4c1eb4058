//! Dismissible alert banner.

use leptos::prelude::*;

use crate::state::alert::AlertState;

/// Renders the single current alert, if any.
///
/// Title and message are text nodes, never HTML.
#[component]
pub fn AlertBanner() -> impl IntoView {
    let alert = expect_context::<RwSignal<AlertState>>();

    view! {
        <div id="alert-container" class="alert-container">
            {move || {
                alert
                    .get()
                    .current
                    .map(|current| {
                        let class = format!("alert {}", current.severity.css_class());
                        let title = format!("{}:", current.title);
                        view! {
                            <div class=class role="alert">
                                <strong class="alert__title">{title}</strong>
                                " "
                                <span class="alert__message">{current.message}</span>
                                <button
                                    type="button"
                                    class="alert__close"
                                    aria-label="Close"
                                    on:click=move |_| alert.update(AlertState::dismiss)
                                >
                                    <span aria-hidden="true">"×"</span>
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
