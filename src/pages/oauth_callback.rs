//! Landing route for the OAuth redirect: stores the credential carried in
//! the query string and moves on.

#[cfg(test)]
#[path = "oauth_callback_test.rs"]
mod oauth_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::actions::auth::{OAuthCallback, complete_oauth};
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::outcome::{apply_outcome, report_failure};

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move || {
        let callback = query.with(|q| callback_from_query(|name| q.get(name)));
        let result = services.with_value(|s| complete_oauth(&s.session, &callback));
        match result {
            Ok(outcome) => apply_outcome(services, notices, &navigate, &outcome, Some("Signed in!")),
            Err(e) => {
                report_failure(notices, &navigate, &e, "Sign-in failed. Please try again.");
                navigate(crate::routes::LOGIN, Default::default());
            }
        }
    });

    view! {
        <div class="auth-page">
            <p>"Signing you in..."</p>
        </div>
    }
}

/// Read the callback fields, accepting the spellings the backend uses.
pub fn callback_from_query(get: impl Fn(&str) -> Option<String>) -> OAuthCallback {
    let first = |names: &[&str]| names.iter().find_map(|name| get(name).filter(|v| !v.trim().is_empty()));
    OAuthCallback {
        token: first(&["token"]),
        user_id: first(&["userId", "user_id", "id"]),
        name: first(&["name", "userName"]),
        avatar: first(&["avatar", "userAvatar"]),
    }
}
