//! Applying action results to the UI: cache invalidation, notices, and
//! navigation.
//!
//! ERROR HANDLING
//! ==============
//! Every page funnels `ActionError`s through `report_failure`, which shows the
//! notice and sends the user to the login route after a 401.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::actions::{ActionError, ActionOutcome, ActionResult};
use crate::net::endpoints::ResourceKey;
use crate::routes;
use crate::state::notices::{Notice, NoticeState};
use crate::state::services::ServicesHandle;

/// Refresh cached resources an action made stale.
pub fn invalidate(services: ServicesHandle, keys: Vec<ResourceKey>) {
    if keys.is_empty() {
        return;
    }
    let cache = services.with_value(|s| s.cache.clone());
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        cache.invalidate(&keys).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cache, keys);
    }
}

/// Invalidate, show `success` (if any), and follow the outcome's redirect.
pub fn apply_outcome<T, F>(
    services: ServicesHandle,
    notices: RwSignal<NoticeState>,
    navigate: &F,
    outcome: &ActionOutcome<T>,
    success: Option<&str>,
) where
    F: Fn(&str, NavigateOptions),
{
    invalidate(services, outcome.affected.clone());
    if let Some(message) = success {
        notices.update(|n| {
            n.push(Notice::success(message));
        });
    }
    if let Some(route) = outcome.redirect.as_deref() {
        navigate(route, NavigateOptions::default());
    }
}

/// Notice text for one kind of action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionMessages {
    pub success: Option<&'static str>,
    /// Shown when the server gives no message of its own.
    pub failure: &'static str,
    /// Pause before following the outcome's redirect.
    pub redirect_delay: Option<Duration>,
}

impl ActionMessages {
    pub fn failing_with(failure: &'static str) -> Self {
        Self { failure, ..Self::default() }
    }

    #[must_use]
    pub fn succeeding_with(mut self, success: &'static str) -> Self {
        self.success = Some(success);
        self
    }

    #[must_use]
    pub fn redirect_after(mut self, delay: Duration) -> Self {
        self.redirect_delay = Some(delay);
        self
    }
}

/// Run an action on the browser executor with `busy` raised for its
/// duration, then apply the outcome or report the failure.
pub fn spawn_action<T, Fut, N, S>(
    services: ServicesHandle,
    notices: RwSignal<NoticeState>,
    navigate: N,
    busy: RwSignal<bool>,
    messages: ActionMessages,
    action: Fut,
    on_success: S,
) where
    T: 'static,
    Fut: Future<Output = ActionResult<T>> + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
    S: FnOnce(&ActionOutcome<T>) + 'static,
{
    busy.set(true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match action.await {
            Ok(outcome) => {
                on_success(&outcome);
                let redirect = outcome.redirect.clone();
                let settled = ActionOutcome { redirect: None, ..outcome };
                apply_outcome(services, notices, &navigate, &settled, messages.success);
                if let Some(route) = redirect {
                    if let Some(delay) = messages.redirect_delay {
                        gloo_timers::future::sleep(delay).await;
                    }
                    navigate(&route, NavigateOptions::default());
                }
            }
            Err(e) => report_failure(notices, &navigate, &e, messages.failure),
        }
        busy.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (services, notices, navigate, messages, action, on_success);
        busy.set(false);
    }
}

/// Show the failure and, after a 401, send the user to log in again.
pub fn report_failure<F>(notices: RwSignal<NoticeState>, navigate: &F, err: &ActionError, fallback: &str)
where
    F: Fn(&str, NavigateOptions),
{
    let (notice, redirect) = failure_notice(err, fallback);
    leptos::logging::warn!("{fallback}: {err}");
    notices.update(|n| {
        n.push(notice);
    });
    if let Some(route) = redirect {
        navigate(route, NavigateOptions::default());
    }
}

/// Notice text for a failed action and where to go next, if anywhere.
pub fn failure_notice(err: &ActionError, fallback: &str) -> (Notice, Option<&'static str>) {
    let redirect = err.is_unauthorized().then_some(routes::LOGIN);
    (Notice::error(err.notice(fallback)), redirect)
}
