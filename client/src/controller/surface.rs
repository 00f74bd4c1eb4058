//! The page regions the controller writes to.
//!
//! DESIGN
//! ======
//! The controller never looks anything up globally. It is constructed with a
//! [`PageSurface`], and every visible effect goes through that capability set.
//! [`SignalSurface`] is the browser implementation backed by the reactive
//! state provided in `App`.

use leptos::prelude::*;

use crate::state::alert::{Alert, AlertState};
use crate::state::indicator::IndicatorState;
use crate::state::panes::{LogsState, ResultsState};
use crate::state::transcript::{ComposerState, EntryBody, Sender, TranscriptState};

/// Capability set of UI regions owned by one page.
pub trait PageSurface {
    fn show_indicator(&self, message: &str);
    fn set_indicator_message(&self, message: &str);
    fn hide_indicator(&self);
    fn show_alert(&self, alert: Alert);
    fn append_entry(&self, sender: Sender, body: EntryBody);
    /// Rendered HTML; an empty string clears the pane.
    fn set_results(&self, html: String);
    fn set_logs(&self, lines: Vec<String>);
    fn clear_input(&self);
    fn reload(&self);
    /// Leave the page for `path`.
    fn navigate(&self, path: &str);
}

/// Reactive signals for each page region.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub indicator: RwSignal<IndicatorState>,
    pub alert: RwSignal<AlertState>,
    pub transcript: RwSignal<TranscriptState>,
    pub results: RwSignal<ResultsState>,
    pub logs: RwSignal<LogsState>,
    pub composer: RwSignal<ComposerState>,
}

impl SignalSurface {
    /// Collect the region signals provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics if called outside the `App` context tree.
    pub fn from_context() -> Self {
        Self {
            indicator: expect_context::<RwSignal<IndicatorState>>(),
            alert: expect_context::<RwSignal<AlertState>>(),
            transcript: expect_context::<RwSignal<TranscriptState>>(),
            results: expect_context::<RwSignal<ResultsState>>(),
            logs: expect_context::<RwSignal<LogsState>>(),
            composer: expect_context::<RwSignal<ComposerState>>(),
        }
    }
}

impl PageSurface for SignalSurface {
    fn show_indicator(&self, message: &str) {
        self.indicator.update(|i| i.show(message));
    }

    fn set_indicator_message(&self, message: &str) {
        self.indicator.update(|i| i.set_message(message));
    }

    fn hide_indicator(&self) {
        self.indicator.update(IndicatorState::hide);
    }

    fn show_alert(&self, alert: Alert) {
        self.alert.update(|a| a.show(alert));
    }

    fn append_entry(&self, sender: Sender, body: EntryBody) {
        self.transcript.update(|t| {
            t.push(sender, body);
        });
    }

    fn set_results(&self, html: String) {
        self.results.update(|r| r.set(html));
    }

    fn set_logs(&self, lines: Vec<String>) {
        self.logs.update(|l| l.replace(lines));
    }

    fn clear_input(&self) {
        self.composer.update(|c| c.draft.clear());
    }

    fn reload(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::error!("page reload failed: {e:?}");
                }
            }
        }
    }

    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    log::error!("navigation to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
