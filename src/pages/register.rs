//! Account registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{RegisterForm, register};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::outcome::{ActionMessages, spawn_action};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Registration failed. Please try again.")
                .succeeding_with("Account created!"),
            async move { register(&client, &form).await },
            |_| {},
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join Christful"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField value=first_name placeholder="First name"/>
                    <TextField value=last_name placeholder="Last name"/>
                    <TextField value=email placeholder="you@example.com" kind="email"/>
                    <TextField value=password placeholder="Password" kind="password"/>
                    <TextField value=confirm_password placeholder="Confirm password" kind="password"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=routes::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    value: RwSignal<String>,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
