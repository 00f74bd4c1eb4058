//! Browser runtime for controller flows: spawned requests, the reconnect
//! timeout, and the status cadence interval.

use std::time::Duration;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

use super::surface::{PageSurface, SignalSurface};
use super::{AfterConnect, ChatFollowUp, ManualConnect, PageController};
#[cfg(feature = "hydrate")]
use crate::config::PageConfig;
use crate::net::api::{AssistantApi, HttpApi};
use crate::net::types::DatabaseTarget;

/// The controller as wired into the live page.
pub type LiveController = PageController<SignalSurface, HttpApi>;

/// Run the connect flow for a nav click in the background.
pub fn spawn_connect<S, A>(controller: PageController<S, A>, target: DatabaseTarget)
where
    S: PageSurface + Clone + 'static,
    A: AssistantApi + Clone + 'static,
{
    if !target.available {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = controller.connect(&target).await;
        log::debug!("connect {} finished: {outcome:?}", target.kind.as_str());
    });
}

/// Run the connect flow for a connect-page form in the background.
pub fn spawn_manual_connect<S, A>(controller: PageController<S, A>, request: ManualConnect)
where
    S: PageSurface + Clone + 'static,
    A: AssistantApi + Clone + 'static,
{
    if controller.begin_manual_connect(&request).is_err() {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = match &request {
            ManualConnect::Postgres(creds) => controller.api.connect_postgres(creds).await,
            ManualConnect::ServiceNow(creds) => controller.api.connect_servicenow(creds).await,
        };
        let outcome = controller.finish_connect(result);
        log::debug!("manual connect {} finished: {outcome:?}", request.kind().as_str());
    });
}

/// Handle a chat form submission.
///
/// The echo, input clear and indicator happen before this returns; only the
/// request and its follow-up run in the background.
pub fn spawn_chat<S, A>(controller: PageController<S, A>, raw: &str)
where
    S: PageSurface + Clone + 'static,
    A: AssistantApi + Clone + 'static,
{
    let Some(message) = controller.begin_chat(raw) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = controller.api.chat(&message).await;
        let follow_up = controller.finish_chat(result);
        run_follow_up(&controller, follow_up);
    });
}

pub fn run_follow_up<S, A>(controller: &PageController<S, A>, follow_up: ChatFollowUp)
where
    S: PageSurface + Clone + 'static,
    A: AssistantApi + Clone + 'static,
{
    match follow_up {
        ChatFollowUp::Done => {}
        ChatFollowUp::Redirect { to, after } => schedule_redirect(to, after),
        ChatFollowUp::Cadence { generation, interval } => start_cadence_timer(controller.clone(), generation, interval),
    }
}

#[cfg(feature = "hydrate")]
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn schedule_redirect(to: String, after: Duration) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("no database connection; redirecting to {to} in {}ms", after.as_millis());
        gloo_timers::callback::Timeout::new(millis(after), move || {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&to) {
                    log::error!("redirect to {to} failed: {e:?}");
                }
            }
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (to, after);
    }
}

fn start_cadence_timer<S, A>(controller: PageController<S, A>, generation: u64, interval: Duration)
where
    S: PageSurface + Clone + 'static,
    A: AssistantApi + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let ticker = controller.clone();
        let timer = gloo_timers::callback::Interval::new(millis(interval), move || {
            if let super::CadenceStep::Finished(Some(timer)) = ticker.tick_cadence(generation) {
                // An interval must not be dropped from inside its own callback.
                leptos::task::spawn_local(async move { drop(timer) });
            }
        });
        if !controller.attach_cadence_timer(generation, Box::new(timer)) {
            log::debug!("status cadence {generation} ended before its timer started");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (controller, generation, interval);
    }
}

/// `Copy` handle to the page's controller for views to capture.
///
/// The controller is only built in the browser. Server renders get an empty
/// handle, so no `Rc` is ever created or dropped on a server thread.
#[derive(Clone, Copy)]
pub struct ControllerHandle {
    #[cfg(feature = "hydrate")]
    inner: StoredValue<LiveController, LocalStorage>,
}

impl ControllerHandle {
    /// Connect button click.
    pub fn connect(self, target: DatabaseTarget) {
        #[cfg(feature = "hydrate")]
        spawn_connect(self.inner.get_value(), target);
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    }

    /// Credential form submission.
    pub fn connect_manual(self, request: ManualConnect) {
        #[cfg(feature = "hydrate")]
        spawn_manual_connect(self.inner.get_value(), request);
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    }

    /// Chat form submission with the raw input value.
    pub fn submit_chat(self, raw: &str) {
        #[cfg(feature = "hydrate")]
        spawn_chat(self.inner.get_value(), raw);
        #[cfg(not(feature = "hydrate"))]
        let _ = raw;
    }
}

/// Build the controller for the current page from context.
///
/// # Panics
///
/// Panics if called outside the `App` context tree.
pub fn use_live_controller(after_connect: AfterConnect) -> ControllerHandle {
    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<PageConfig>();
        let api = HttpApi::new(&config);
        let controller =
            PageController::new(SignalSurface::from_context(), api, config).with_after_connect(after_connect);
        ControllerHandle { inner: StoredValue::new_local(controller) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = after_connect;
        ControllerHandle {}
    }
}
