//! Chat transcript and message form.

use leptos::prelude::*;

use crate::controller::browser::ControllerHandle;
use crate::state::transcript::{ComposerState, EntryBody, Sender, TranscriptEntry, TranscriptState};

/// Scrolling transcript plus the input form.
///
/// Submitting goes through the controller, which echoes the message, clears
/// the input, and shows the processing indicator before the request leaves.
#[component]
pub fn ChatWindow(controller: ControllerHandle) -> impl IntoView {
    let transcript = expect_context::<RwSignal<TranscriptState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();
    let window_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = transcript.with(TranscriptState::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = window_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = composer.with_untracked(|c| c.draft.clone());
        controller.submit_chat(&raw);
    };

    view! {
        <div class="chat-window-frame">
            <div id="chat-window" class="chat-window" node_ref=window_ref>
                <div id="messages" class="chat-window__messages">
                    {move || {
                        transcript
                            .get()
                            .entries
                            .into_iter()
                            .map(render_entry)
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="message-input"
                    class="chat-form__input"
                    type="text"
                    autocomplete="off"
                    placeholder="Ask about your data..."
                    prop:value=move || composer.get().draft
                    on:input=move |ev| composer.update(|c| c.draft = event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary chat-form__send">
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn render_entry(entry: TranscriptEntry) -> impl IntoView {
    let label = format!("{}: ", entry.sender.label());
    let is_user = entry.sender == Sender::You;
    let is_error = entry.sender == Sender::Error;
    let body = match entry.body {
        EntryBody::Text(text) => view! { <span class="message__text">{text}</span> }.into_any(),
        EntryBody::Html(html) => view! { <div class="message__markdown" inner_html=html></div> }.into_any(),
    };

    view! {
        <div class="message" class:message--user=is_user class:message--error=is_error>
            <strong class="message__sender">{label}</strong>
            {body}
        </div>
    }
}
