//! Group directory with creation form, and group detail.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::groups::{GROUP_REDIRECT_DELAY, GroupDraft, create_group, join_group};
use crate::components::nav_bar::NavBar;
use crate::net::endpoints;
use crate::net::types::{CommunityList, Group, GroupList};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::identity::is_member;
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn GroupsPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_unauth_redirect(services, navigate.clone());
    let groups = use_api(|| Some(endpoints::groups()));
    let communities = use_api(|| Some(endpoints::communities()));
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let community_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let draft = GroupDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            community_id: community_id.get_untracked(),
        };
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Failed to create group.")
                .succeeding_with("Group created!")
                .redirect_after(GROUP_REDIRECT_DELAY),
            async move { create_group(&client, &draft).await },
            move |_| {
                name.set(String::new());
                description.set(String::new());
            },
        );
    };

    view! {
        <NavBar/>
        <main class="groups-page">
            <form class="card create-form" on:submit=on_create>
                <h2>"Start a group"</h2>
                <input
                    class="input"
                    type="text"
                    placeholder="Group name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <select class="input" on:change=move |ev| community_id.set(event_target_value(&ev))>
                    <option value="">"Choose a community"</option>
                    {move || {
                        communities
                            .data::<CommunityList>()
                            .map(|list| list.communities)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <option value=c.id>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create" }}
                </button>
            </form>
            <Show when=move || groups.is_loading()>
                <p class="muted">"Loading groups..."</p>
            </Show>
            {move || groups.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load groups.")}</p>
            })}
            <ul class="card-list">
                {move || {
                    groups
                        .data::<GroupList>()
                        .map(|list| list.groups)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|group| view! { <GroupRow group=group/> })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}

#[component]
fn GroupRow(group: Group) -> impl IntoView {
    let href = routes::group(&group.id);
    view! {
        <li class="card">
            <a class="card__title" href=href>{group.name.clone()}</a>
            <p class="muted">{group.description.clone().unwrap_or_default()}</p>
            <JoinGroupButton group=group/>
        </li>
    }
}

#[component]
fn JoinGroupButton(group: Group) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let joined = services.with_value(|s| is_member(&s.session, &group.members));
    let group_id = group.id;

    let on_join = move |_| {
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let id = group_id.clone();
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Could not join group.").succeeding_with("You joined the group."),
            async move { join_group(&client, &id).await },
            |_| {},
        );
    };

    view! {
        <Show
            when=move || !joined
            fallback=|| view! { <span class="badge">"Member"</span> }
        >
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_join.clone()>
                "Join"
            </button>
        </Show>
    }
}

#[component]
pub fn GroupPage() -> impl IntoView {
    install_unauth_redirect(use_services(), use_navigate());
    let params = use_params_map();
    let group = use_api(move || params.read().get("id").map(|id| endpoints::group(&id)));

    view! {
        <NavBar/>
        <main class="group-page">
            <Show when=move || group.is_loading()>
                <p class="muted">"Loading group..."</p>
            </Show>
            {move || group.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load this group.")}</p>
            })}
            {move || group.data::<Group>().map(|g| {
                let community_link = g.community.as_deref().map(routes::community);
                view! {
                    <header class="card">
                        <h1>{g.name.clone()}</h1>
                        <p>{g.description.clone().unwrap_or_default()}</p>
                        {community_link.map(|href| view! { <a href=href>"Back to community"</a> })}
                        <JoinGroupButton group=g/>
                    </header>
                }
            })}
        </main>
    }
}
