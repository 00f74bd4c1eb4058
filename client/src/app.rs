//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PageConfig;
use crate::pages::{chat::ChatPage, connect::ConnectPage};
use crate::state::{
    alert::AlertState,
    connection::ConnectionState,
    indicator::IndicatorState,
    panes::{LogsState, ResultsState},
    transcript::{ComposerState, TranscriptState},
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page configuration and one signal per page region, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(PageConfig::default());
    provide_context(RwSignal::new(IndicatorState::default()));
    provide_context(RwSignal::new(AlertState::default()));
    provide_context(RwSignal::new(TranscriptState::default()));
    provide_context(RwSignal::new(ComposerState::default()));
    provide_context(RwSignal::new(ResultsState::default()));
    provide_context(RwSignal::new(LogsState::default()));
    provide_context(RwSignal::new(ConnectionState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/dbassist.css"/>
        <Title text="Database Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("connect") view=ConnectPage/>
            </Routes>
        </Router>
    }
}
