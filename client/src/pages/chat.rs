//! Main chat page: transcript on the left, results and logs on the right.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::chat_window::ChatWindow;
use crate::components::database_nav::DatabaseNav;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::logs_pane::LogsPane;
use crate::components::results_pane::ResultsPane;
use crate::controller::AfterConnect;
use crate::controller::browser::use_live_controller;

#[component]
pub fn ChatPage() -> impl IntoView {
    let controller = use_live_controller(AfterConnect::Reload);

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Database Assistant"</h1>
                <DatabaseNav controller=controller/>
            </header>

            <AlertBanner/>
            <LoadingIndicator/>

            <main class="chat-page__body">
                <section class="chat-page__chat">
                    <ChatWindow controller=controller/>
                </section>
                <aside class="chat-page__side">
                    <h2 class="chat-page__pane-title">"Results"</h2>
                    <ResultsPane/>
                    <h2 class="chat-page__pane-title">"Logs"</h2>
                    <LogsPane/>
                </aside>
            </main>
        </div>
    }
}
