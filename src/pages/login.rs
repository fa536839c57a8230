//! Login page supporting email + password and Google OAuth.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{LoginForm, login, oauth_start_url};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::outcome::{ActionMessages, spawn_action};

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let google_href = services.with_value(|s| oauth_start_url(&s.client));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Login failed. Please try again.").succeeding_with("Welcome back!"),
            async move { login(&client, &form).await },
            |_| {},
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Christful"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-divider"></div>
                <a href=google_href class="btn">"Continue with Google"</a>
                <p class="auth-card__footer">
                    "New here? "
                    <a href=routes::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
