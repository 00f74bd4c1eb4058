//! Reconnect page, the target of the no-database-connection redirect.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::connect_forms::{PostgresConnectForm, ServiceNowConnectForm};
use crate::components::database_nav::DatabaseNav;
use crate::components::loading_indicator::LoadingIndicator;
use crate::config::PageConfig;
use crate::controller::AfterConnect;
use crate::controller::browser::use_live_controller;

/// Configured targets plus manual credential forms. A successful connect
/// returns to the chat page.
#[component]
pub fn ConnectPage() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let chat_path = config.chat_path.clone();
    let controller = use_live_controller(AfterConnect::Navigate(config.chat_path));

    view! {
        <div class="connect-page">
            <h1>"Connect to a database"</h1>
            <p>"The assistant has no database connection. Pick a configured target or enter credentials."</p>

            <AlertBanner/>
            <LoadingIndicator/>
            <DatabaseNav controller=controller/>

            <div class="connect-forms">
                <PostgresConnectForm controller=controller/>
                <ServiceNowConnectForm controller=controller/>
            </div>

            <a href=chat_path class="connect-page__back">
                "Back to chat"
            </a>
        </div>
    }
}
