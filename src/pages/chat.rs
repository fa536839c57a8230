//! Conversation list and message thread.
//!
//! The thread is a plain cached resource: sending a message invalidates it,
//! which refetches the list. There is no push channel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::chat::send_message;
use crate::components::nav_bar::NavBar;
use crate::net::endpoints;
use crate::net::types::{ChatMessage, Conversation, ConversationList, MessageList};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn ChatsPage() -> impl IntoView {
    let services = use_services();
    install_unauth_redirect(services, use_navigate());
    let me = services.with_value(|s| s.session.user_id());
    let chats = use_api(|| Some(endpoints::chats()));

    view! {
        <NavBar/>
        <main class="chats-page">
            <h1>"Chats"</h1>
            <Show when=move || chats.is_loading()>
                <p class="muted">"Loading conversations..."</p>
            </Show>
            {move || chats.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load conversations.")}</p>
            })}
            <ul class="card-list">
                {move || {
                    chats
                        .data::<ConversationList>()
                        .map(|list| list.chats)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|chat| {
                            let title = conversation_title(&chat, me.as_deref());
                            view! {
                                <li class="card">
                                    <a class="card__title" href=routes::chat(&chat.id)>{title}</a>
                                    <p class="muted">{chat.last_message.unwrap_or_default()}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_unauth_redirect(services, navigate.clone());
    let params = use_params_map();
    let chat_id = move || params.read().get("id");
    let thread = use_api(move || chat_id().map(|id| endpoints::chat_messages(&id)));
    let me = services.with_value(|s| s.session.user_id());
    let draft = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(id) = chat_id() else {
            return;
        };
        let client = services.with_value(|s| s.client.clone());
        let content = draft.get_untracked();
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Message failed to send."),
            async move { send_message(&client, &id, &content).await },
            move |_| draft.set(String::new()),
        );
    };

    view! {
        <NavBar/>
        <main class="chat-page">
            <a href=routes::CHATS>"All chats"</a>
            <Show when=move || thread.is_loading()>
                <p class="muted">"Loading messages..."</p>
            </Show>
            {move || thread.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load messages.")}</p>
            })}
            <ol class="chat-thread">
                {move || {
                    let me = me.clone();
                    thread
                        .data::<MessageList>()
                        .map(|list| list.messages)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|message| {
                            let mine = is_from(&message, me.as_deref());
                            let who = message.sender.as_ref().map(|s| s.display_name()).unwrap_or_default();
                            view! {
                                <li class="chat-message" class:chat-message--mine=mine>
                                    <span class="chat-message__sender">{who}</span>
                                    <p>{message.content}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
            <form class="chat-compose" on:submit=on_send>
                <input
                    class="input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Send"</button>
            </form>
        </main>
    }
}

/// Conversation name, or the other participants' names when it has none.
pub fn conversation_title(chat: &Conversation, me: Option<&str>) -> String {
    if let Some(name) = chat.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    let others: Vec<String> = chat
        .participants
        .iter()
        .filter(|p| Some(p.id.as_str()) != me)
        .map(|p| p.display_name())
        .collect();
    if others.is_empty() { "Conversation".to_owned() } else { others.join(", ") }
}

pub fn is_from(message: &ChatMessage, user_id: Option<&str>) -> bool {
    match (message.sender.as_ref(), user_id) {
        (Some(sender), Some(me)) => sender.id == me,
        _ => false,
    }
}
