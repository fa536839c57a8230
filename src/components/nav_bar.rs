//! Top navigation with section links, the notification bell, and the
//! signed-in user's chip.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::logout;
use crate::net::endpoints;
use crate::net::types::NotificationList;
use crate::routes;
use crate::state::services::use_services;
use crate::util::use_api::use_api;

#[component]
pub fn NavBar() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let signed_in = services.with_value(|s| s.session.is_authenticated());
    let (name, avatar, user_id) = services.with_value(|s| {
        (
            s.session.display_name().unwrap_or_else(|| "Me".to_owned()),
            s.session.avatar_url(),
            s.session.user_id().unwrap_or_default(),
        )
    });

    let notifications = use_api(move || signed_in.then(endpoints::notifications));
    let badge = move || {
        notifications
            .data::<NotificationList>()
            .and_then(|list| badge_label(list.unread_count()))
    };

    let on_logout = move |_| {
        let outcome = services.with_value(|s| logout(&s.session));
        if let Some(route) = outcome.redirect.as_deref() {
            navigate(route, Default::default());
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=routes::HOME>"Christful"</a>
            <nav class="nav-bar__links">
                <a href=routes::HOME>"Feed"</a>
                <a href=routes::REELS>"Reels"</a>
                <a href=routes::COMMUNITIES>"Communities"</a>
                <a href=routes::GROUPS>"Groups"</a>
                <a href=routes::CHATS>"Chats"</a>
            </nav>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || signed_in
                fallback=|| view! { <a class="btn" href=routes::LOGIN>"Log in"</a> }
            >
                <a class="nav-bar__bell" href=routes::NOTIFICATIONS title="Notifications">
                    "🔔"
                    {move || badge().map(|label| view! { <span class="nav-bar__badge">{label}</span> })}
                </a>
                <a class="nav-bar__me" href=routes::profile(&user_id)>
                    {avatar.clone().map(|src| view! { <img class="avatar avatar--small" src=src alt=""/> })}
                    <span>{name.clone()}</span>
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}

/// Badge text for the bell: nothing at zero, capped at `9+`.
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_owned()),
    }
}
