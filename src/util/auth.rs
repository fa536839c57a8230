//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::services::ServicesHandle;

/// Redirect to the login route when no credential is stored.
///
/// The session is not reactive, so this checks once when the page mounts.
/// Later 401s redirect from `use_api` on reads and from `report_failure` on
/// actions.
pub fn install_unauth_redirect<F>(services: ServicesHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !services.with_value(|s| s.session.is_authenticated()) {
            navigate(routes::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
