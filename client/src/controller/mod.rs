//! Page controller: connect and chat flows over an injected surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components forward clicks and form submissions here. The controller talks
//! to the server through an [`AssistantApi`] and reports every visible effect
//! through a [`PageSurface`]. Timers are not started here: the chat flow
//! returns a [`ChatFollowUp`] and `browser` turns it into real timeouts and
//! intervals.
//!
//! ERROR HANDLING
//! ==============
//! Application errors (an `error` field in a 2xx response) are shown with the
//! server's text. Every [`ApiError`] is a transport failure and gets one fixed
//! generic message. Nothing is retried.


pub mod browser;
pub mod cadence;
pub mod surface;

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::PageConfig;
use crate::net::api::{ApiError, AssistantApi};
use crate::net::types::{
    ChatAnswer, ChatReply, ChatResponse, ConnectResponse, DatabaseKind, DatabaseTarget, PostgresCredentials,
    ServiceNowCredentials,
};
use crate::state::alert::Alert;
use crate::state::transcript::{EntryBody, Sender};
use crate::util::markdown::{render_markdown_html, render_results_html};
use cadence::{CadenceSlot, Retired, SlotTick, StatusCadence};
use surface::PageSurface;

pub const PROCESSING_MESSAGE: &str = "Processing...";
pub const ERROR_TITLE: &str = "Error";
pub const CONNECT_FAILED_MESSAGE: &str = "An error occurred while connecting to the database.";
pub const CHAT_FAILED_MESSAGE: &str = "An error occurred while communicating with the server.";
pub const MISSING_FIELDS_TITLE: &str = "Missing fields";
const MANUAL_SERVICENOW_NAME: &str = "ServiceNow";

/// How a connect click ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Target unavailable; nothing was shown or sent.
    Ignored,
    /// Server accepted; the page reloaded or navigated away.
    Connected,
    /// Server refused with this message.
    Rejected(String),
    Failed(ApiError),
    /// Form submitted with these required fields blank; nothing was sent.
    Incomplete(Vec<&'static str>),
}

/// What the page does once the backend accepts a connect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AfterConnect {
    /// Reload the current page so it picks up the new connection.
    #[default]
    Reload,
    /// Go to this path instead.
    Navigate(String),
}

/// Credentials typed into one of the connect-page forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManualConnect {
    Postgres(PostgresCredentials),
    ServiceNow(ServiceNowCredentials),
}

impl ManualConnect {
    #[must_use]
    pub fn kind(&self) -> DatabaseKind {
        match self {
            Self::Postgres(_) => DatabaseKind::Postgres,
            Self::ServiceNow(_) => DatabaseKind::ServiceNow,
        }
    }

    /// Name used in the connecting message.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Postgres(creds) => creds.database.trim(),
            Self::ServiceNow(_) => MANUAL_SERVICENOW_NAME,
        }
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Postgres(creds) => creds.missing_fields(),
            Self::ServiceNow(creds) => creds.missing_fields(),
        }
    }
}

/// Work left over after a chat response has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatFollowUp {
    Done,
    /// Navigate to `to` once `after` has elapsed.
    Redirect { to: String, after: Duration },
    /// Call [`PageController::tick_cadence`] with `generation` every `interval`.
    Cadence { generation: u64, interval: Duration },
}

/// Outcome of one cadence tick.
pub enum CadenceStep {
    Continue,
    /// The answer has been rendered. The returned timer must be dropped
    /// outside of its own callback.
    Finished(Option<Box<dyn Any>>),
    Stale,
}

/// Connect/chat controller for one page.
pub struct PageController<S, A> {
    surface: S,
    api: A,
    config: PageConfig,
    after_connect: AfterConnect,
    cadence: Rc<RefCell<CadenceSlot>>,
}

impl<S: Clone, A: Clone> Clone for PageController<S, A> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            api: self.api.clone(),
            config: self.config.clone(),
            after_connect: self.after_connect.clone(),
            cadence: Rc::clone(&self.cadence),
        }
    }
}

/// `Connecting to chinook.db (SQLite Database)...`
#[must_use]
pub fn connecting_message(target: &DatabaseTarget) -> String {
    connecting_message_for(&target.name, target.kind)
}

fn connecting_message_for(name: &str, kind: DatabaseKind) -> String {
    format!("Connecting to {name} ({})...", kind.display_name())
}

impl<S: PageSurface, A: AssistantApi> PageController<S, A> {
    pub fn new(surface: S, api: A, config: PageConfig) -> Self {
        Self {
            surface,
            api,
            config,
            after_connect: AfterConnect::default(),
            cadence: Rc::new(RefCell::new(CadenceSlot::default())),
        }
    }

    #[must_use]
    pub fn with_after_connect(mut self, after_connect: AfterConnect) -> Self {
        self.after_connect = after_connect;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // =========================================================================
    // CONNECT
    // =========================================================================

    /// Connect the backend to `target`, then reload or navigate on success.
    pub async fn connect(&self, target: &DatabaseTarget) -> ConnectOutcome {
        if !self.begin_connect(target) {
            return ConnectOutcome::Ignored;
        }
        let result = self.api.connect_env(target.kind).await;
        self.finish_connect(result)
    }

    /// Show the connecting indicator. Returns `false` for unavailable targets.
    pub fn begin_connect(&self, target: &DatabaseTarget) -> bool {
        if !target.available {
            log::debug!("ignoring connect click for unavailable target {}", target.kind.as_str());
            return false;
        }
        self.surface.show_indicator(&connecting_message(target));
        true
    }

    /// Connect with credentials from a connect-page form.
    pub async fn connect_manual(&self, request: &ManualConnect) -> ConnectOutcome {
        if let Err(missing) = self.begin_manual_connect(request) {
            return ConnectOutcome::Incomplete(missing);
        }
        let result = match request {
            ManualConnect::Postgres(creds) => self.api.connect_postgres(creds).await,
            ManualConnect::ServiceNow(creds) => self.api.connect_servicenow(creds).await,
        };
        self.finish_connect(result)
    }

    /// Check the form and show the connecting indicator. Blank required
    /// fields are reported in a warning alert and returned.
    pub fn begin_manual_connect(&self, request: &ManualConnect) -> Result<(), Vec<&'static str>> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            self.show_alert(Alert::warning(
                MISSING_FIELDS_TITLE,
                &format!("Please fill in: {}.", missing.join(", ")),
            ));
            return Err(missing);
        }
        self.surface
            .show_indicator(&connecting_message_for(request.name(), request.kind()));
        Ok(())
    }

    pub fn finish_connect(&self, result: Result<ConnectResponse, ApiError>) -> ConnectOutcome {
        self.surface.hide_indicator();
        match result {
            Ok(resp) if resp.success => {
                match &self.after_connect {
                    AfterConnect::Reload => self.surface.reload(),
                    AfterConnect::Navigate(path) => self.surface.navigate(path),
                }
                ConnectOutcome::Connected
            }
            Ok(resp) => {
                let message = resp.error.unwrap_or_default();
                self.show_alert(Alert::error(ERROR_TITLE, &message));
                ConnectOutcome::Rejected(message)
            }
            Err(e) => {
                log::warn!("connect request failed: {e}");
                self.show_alert(Alert::error(ERROR_TITLE, CONNECT_FAILED_MESSAGE));
                ConnectOutcome::Failed(e)
            }
        }
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Submit the chat form. Returns `None` when the input was blank and
    /// nothing happened.
    pub async fn submit_chat(&self, raw: &str) -> Option<ChatFollowUp> {
        let message = self.begin_chat(raw)?;
        let result = self.api.chat(&message).await;
        Some(self.finish_chat(result))
    }

    /// Echo the user's message and show the processing indicator.
    ///
    /// A cadence still running from an earlier answer is cut short and its
    /// answer rendered immediately.
    pub fn begin_chat(&self, raw: &str) -> Option<String> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        self.cancel_cadence();
        self.surface.append_entry(Sender::You, EntryBody::Text(message.to_owned()));
        self.surface.clear_input();
        self.surface.show_indicator(PROCESSING_MESSAGE);
        Some(message.to_owned())
    }

    pub fn finish_chat(&self, result: Result<ChatResponse, ApiError>) -> ChatFollowUp {
        match result.map(ChatResponse::into_reply) {
            Ok(ChatReply::Failed(error)) => {
                self.surface.hide_indicator();
                let redirect = self.config.is_no_connection_error(&error);
                self.surface.append_entry(Sender::Error, EntryBody::Text(error));
                if redirect {
                    ChatFollowUp::Redirect { to: self.config.reconnect_path.clone(), after: self.config.redirect_delay() }
                } else {
                    ChatFollowUp::Done
                }
            }
            Ok(ChatReply::Answer(answer)) => match StatusCadence::new(answer) {
                Ok(cadence) => {
                    let generation = self.start_cadence(cadence);
                    ChatFollowUp::Cadence { generation, interval: self.config.status_interval() }
                }
                Err(answer) => {
                    self.surface.hide_indicator();
                    self.render_answer(answer);
                    ChatFollowUp::Done
                }
            },
            Err(e) => {
                log::warn!("chat request failed: {e}");
                self.surface.hide_indicator();
                self.surface.append_entry(Sender::Error, EntryBody::Text(CHAT_FAILED_MESSAGE.to_owned()));
                ChatFollowUp::Done
            }
        }
    }

    pub fn show_alert(&self, alert: Alert) {
        self.surface.show_alert(alert);
    }

    /// Transcript entry, logs pane, and results pane for a finished answer.
    fn render_answer(&self, answer: ChatAnswer) {
        let html = render_markdown_html(&answer.message);
        self.surface.append_entry(Sender::Assistant, EntryBody::Html(html));
        self.surface.set_logs(answer.logs);
        self.surface
            .set_results(render_results_html(answer.database_response.as_deref()));
    }

    // =========================================================================
    // STATUS CADENCE
    // =========================================================================

    /// Show the first status now and install the cadence for later ticks.
    fn start_cadence(&self, mut cadence: StatusCadence) -> u64 {
        self.cancel_cadence();
        if let Some(first) = cadence.advance() {
            self.surface.show_indicator(first);
        }
        let (generation, displaced) = self.cadence.borrow_mut().install(cadence);
        debug_assert!(displaced.is_none(), "slot emptied by cancel_cadence");
        generation
    }

    /// Give the slot the timer driving `generation`. Returns `false` (and
    /// drops the timer) if that cadence is already gone.
    pub fn attach_cadence_timer(&self, generation: u64, timer: Box<dyn Any>) -> bool {
        let attached = self.cadence.borrow_mut().attach_timer(generation, timer);
        attached.is_ok()
    }

    pub fn tick_cadence(&self, generation: u64) -> CadenceStep {
        let tick = self.cadence.borrow_mut().tick(generation);
        match tick {
            SlotTick::Show(status) => {
                self.surface.set_indicator_message(&status);
                CadenceStep::Continue
            }
            SlotTick::Exhausted(retired) => {
                self.surface.hide_indicator();
                self.render_answer(retired.cadence.into_answer());
                CadenceStep::Finished(retired.timer)
            }
            SlotTick::Stale => CadenceStep::Stale,
        }
    }

    #[must_use]
    pub fn cadence_active(&self) -> bool {
        self.cadence.borrow().is_active()
    }

    /// Stop the running cadence, if any, and render its answer now.
    pub fn cancel_cadence(&self) {
        let retired = self.cadence.borrow_mut().take();
        if let Some(retired) = retired {
            self.flush(retired);
        }
    }

    fn flush(&self, retired: Retired) {
        let Retired { cadence, timer } = retired;
        drop(timer);
        self.surface.hide_indicator();
        self.render_answer(cadence.into_answer());
    }
}
