//! Database nav: current connection plus one connect button per target.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::controller::browser::ControllerHandle;
use crate::state::connection::ConnectionState;

/// Fetches the page context once, then renders the target buttons.
///
/// Unavailable targets render disabled and the controller ignores them even
/// if a click gets through.
#[component]
pub fn DatabaseNav(controller: ControllerHandle) -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let config = expect_context::<PageConfig>();

    Effect::new(move || {
        if connection.with_untracked(|c| c.loaded) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let endpoint = config.targets_endpoint.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_page_context(&endpoint).await {
                    Ok(context) => connection.update(|c| c.load(context)),
                    Err(e) => log::warn!("loading database targets failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    });

    view! {
        <nav class="db-nav">
            <span class="db-nav__current">{move || connection.get().summary()}</span>
            <ul class="db-nav__targets">
                {move || {
                    connection
                        .get()
                        .context
                        .targets
                        .into_iter()
                        .map(|target| {
                            let available = target.available;
                            let id = format!("connect-{}-btn", target.kind.as_str());
                            let label = format!("{} ({})", target.name, target.kind.display_name());
                            let on_click = move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                controller.connect(target.clone());
                            };
                            view! {
                                <li>
                                    <button
                                        id=id
                                        type="button"
                                        class="nav-link"
                                        class:disabled=!available
                                        disabled=!available
                                        on:click=on_click
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </nav>
    }
}
