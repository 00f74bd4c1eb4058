//! Manual credential forms for the connect page.

use leptos::prelude::*;

use crate::controller::ManualConnect;
use crate::controller::browser::ControllerHandle;
use crate::net::types::{PostgresCredentials, ServiceNowCredentials};

/// PostgreSQL host, port, database, user, password and optional schema.
#[component]
pub fn PostgresConnectForm(controller: ControllerHandle) -> impl IntoView {
    let form = RwSignal::new(PostgresCredentials::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.connect_manual(ManualConnect::Postgres(form.get_untracked()));
    };

    view! {
        <form id="postgres-form" class="connect-form" on:submit=on_submit>
            <h2>"PostgreSQL"</h2>
            {text_field("Host", "host", "text", form, |c| c.host.clone(), |c, v| c.host = v)}
            {text_field("Port", "port", "text", form, |c| c.port.clone(), |c, v| c.port = v)}
            {text_field("Database", "database", "text", form, |c| c.database.clone(), |c, v| c.database = v)}
            {text_field("User", "user", "text", form, |c| c.user.clone(), |c, v| c.user = v)}
            {text_field("Password", "password", "password", form, |c| c.password.clone(), |c, v| c.password = v)}
            {text_field("Schema (optional)", "schema", "text", form, |c| c.schema.clone(), |c, v| c.schema = v)}
            <button type="submit" class="btn btn--primary">"Connect"</button>
        </form>
    }
}

/// ServiceNow API base URL, user and password.
#[component]
pub fn ServiceNowConnectForm(controller: ControllerHandle) -> impl IntoView {
    let form = RwSignal::new(ServiceNowCredentials::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.connect_manual(ManualConnect::ServiceNow(form.get_untracked()));
    };

    view! {
        <form id="servicenow-form" class="connect-form" on:submit=on_submit>
            <h2>"ServiceNow"</h2>
            {text_field("API base URL", "api", "url", form, |c| c.api.clone(), |c, v| c.api = v)}
            {text_field("User", "user", "text", form, |c| c.user.clone(), |c, v| c.user = v)}
            {text_field("Password", "password", "password", form, |c| c.password.clone(), |c, v| c.password = v)}
            <button type="submit" class="btn btn--primary">"Connect"</button>
        </form>
    }
}

fn text_field<T: Send + Sync + 'static>(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                name=name
                type=input_type
                autocomplete="off"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}
