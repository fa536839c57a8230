//! Notification inbox with per-item and bulk "mark as read".

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::notifications::{mark_all_notifications_read, mark_notification_read};
use crate::components::nav_bar::NavBar;
use crate::net::endpoints;
use crate::net::types::{Notification, NotificationList};
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_unauth_redirect(services, navigate.clone());
    let inbox = use_api(|| Some(endpoints::notifications()));
    let busy = RwSignal::new(false);
    let unread = move || inbox.data::<NotificationList>().map_or(0, |list| list.unread_count());

    let on_mark_all = move |_| {
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Could not update notifications.")
                .succeeding_with("All notifications marked as read."),
            async move { mark_all_notifications_read(&client).await },
            |_| {},
        );
    };

    view! {
        <NavBar/>
        <main class="notifications-page">
            <header class="notifications-page__header">
                <h1>"Notifications"</h1>
                <button
                    class="btn"
                    disabled=move || busy.get() || unread() == 0
                    on:click=on_mark_all
                >
                    "Mark all as read"
                </button>
            </header>
            <Show when=move || inbox.is_loading()>
                <p class="muted">"Loading notifications..."</p>
            </Show>
            {move || inbox.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load notifications.")}</p>
            })}
            <ul class="notification-list">
                {move || {
                    let items = inbox.data::<NotificationList>().map(|list| list.notifications).unwrap_or_default();
                    if items.is_empty() && !inbox.is_loading() {
                        return view! { <li class="muted">"You're all caught up."</li> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|n| view! { <NotificationRow notification=n/> })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </main>
    }
}

#[component]
fn NotificationRow(notification: Notification) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let text = notification_text(&notification);
    let unread = !notification.read;
    let id = notification.id.clone();

    let on_read = move |_| {
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let id = id.clone();
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Could not update notification."),
            async move { mark_notification_read(&client, &id).await },
            |_| {},
        );
    };

    view! {
        <li class="notification" class:notification--unread=unread>
            <span class="notification__text">{text}</span>
            <span class="notification__time">{notification.created_at.clone().unwrap_or_default()}</span>
            <Show when=move || unread>
                <button class="btn btn--small" disabled=move || busy.get() on:click=on_read.clone()>
                    "Mark read"
                </button>
            </Show>
        </li>
    }
}

/// Line shown for a notification: the sender's name leads when known.
pub fn notification_text(notification: &Notification) -> String {
    let message = notification.message.trim();
    match &notification.sender {
        Some(sender) if !message.is_empty() => format!("{} {message}", sender.display_name()),
        Some(sender) => format!("{} sent you a notification", sender.display_name()),
        None if message.is_empty() => "New notification".to_owned(),
        None => message.to_owned(),
    }
}
