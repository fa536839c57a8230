//! Community directory, creation form, and community detail.

#[cfg(test)]
#[path = "communities_test.rs"]
mod communities_test;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::ActionResult;
use crate::actions::communities::{CommunityDraft, create_community, join_community, leave_community};
use crate::actions::groups::{GROUP_REDIRECT_DELAY, GroupDraft, create_group};
use crate::components::nav_bar::NavBar;
use crate::net::endpoints;
use crate::net::types::{Community, CommunityList, GroupList};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::identity::is_member;
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn CommunitiesPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_unauth_redirect(services, navigate.clone());
    let communities = use_api(|| Some(endpoints::communities()));
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let draft = CommunityDraft { name: name.get_untracked(), description: description.get_untracked() };
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Failed to create community.").succeeding_with("Community created!"),
            async move { create_community(&client, &draft).await },
            move |_| {
                name.set(String::new());
                description.set(String::new());
            },
        );
    };

    view! {
        <NavBar/>
        <main class="communities-page">
            <form class="card create-form" on:submit=on_create>
                <h2>"Start a community"</h2>
                <input
                    class="input"
                    type="text"
                    placeholder="Community name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="What is it about?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create" }}
                </button>
            </form>
            <Show when=move || communities.is_loading()>
                <p class="muted">"Loading communities..."</p>
            </Show>
            {move || communities.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load communities.")}</p>
            })}
            <ul class="card-list">
                {move || {
                    communities
                        .data::<CommunityList>()
                        .map(|list| list.communities)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|community| view! { <CommunityRow community=community/> })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}

#[component]
fn CommunityRow(community: Community) -> impl IntoView {
    let href = routes::community(&community.id);
    let members = community.members.len();
    view! {
        <li class="card">
            <a class="card__title" href=href>{community.name.clone()}</a>
            <p class="muted">{community.description.clone().unwrap_or_default()}</p>
            <span class="card__meta">{member_label(members)}</span>
            <MembershipButton community=community/>
        </li>
    }
}

/// Join or leave, depending on whether the viewer is already a member.
#[component]
fn MembershipButton(community: Community) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let joined = services.with_value(|s| is_member(&s.session, &community.members));
    let community_id = community.id;

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let id = community_id.clone();
        let (messages, action): (ActionMessages, LocalBoxFuture<'static, ActionResult<()>>) = if joined {
            (
                ActionMessages::failing_with("Could not leave community.").succeeding_with("You left the community."),
                async move { leave_community(&client, &id).await }.boxed_local(),
            )
        } else {
            (
                ActionMessages::failing_with("Could not join community.").succeeding_with("Welcome to the community!"),
                async move { join_community(&client, &id).await }.boxed_local(),
            )
        };
        spawn_action(services, notices, navigate.clone(), busy, messages, action, |_| {});
    };

    view! {
        <button class="btn" class:btn--primary=!joined disabled=move || busy.get() on:click=on_click>
            {if joined { "Leave" } else { "Join" }}
        </button>
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_unauth_redirect(services, navigate.clone());
    let params = use_params_map();
    let community_id = move || params.read().get("id");
    let community = use_api(move || community_id().map(|id| endpoints::community(&id)));
    let groups = use_api(|| Some(endpoints::groups()));
    let group_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create_group = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let draft = GroupDraft {
            name: group_name.get_untracked(),
            description: String::new(),
            community_id: community_id().unwrap_or_default(),
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
            move |_| group_name.set(String::new()),
        );
    };

    let community_groups = move || {
        let id = community_id().unwrap_or_default();
        groups
            .data::<GroupList>()
            .map(|list| list.groups)
            .unwrap_or_default()
            .into_iter()
            .filter(|group| group.community.as_deref() == Some(id.as_str()))
            .collect::<Vec<_>>()
    };

    view! {
        <NavBar/>
        <main class="community-page">
            <Show when=move || community.is_loading()>
                <p class="muted">"Loading community..."</p>
            </Show>
            {move || community.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load this community.")}</p>
            })}
            {move || community.data::<Community>().map(|c| view! {
                <header class="card">
                    <h1>{c.name.clone()}</h1>
                    <p>{c.description.clone().unwrap_or_default()}</p>
                    <span class="card__meta">{member_label(c.members.len())}</span>
                    <MembershipButton community=c/>
                </header>
            })}
            <section>
                <h2>"Groups"</h2>
                <ul class="card-list">
                    {move || community_groups()
                        .into_iter()
                        .map(|group| view! {
                            <li class="card">
                                <a class="card__title" href=routes::group(&group.id)>{group.name}</a>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <form class="create-form" on:submit=on_create_group>
                    <input
                        class="input"
                        type="text"
                        placeholder="New group name"
                        prop:value=move || group_name.get()
                        on:input=move |ev| group_name.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>"Create group"</button>
                </form>
            </section>
        </main>
    }
}

pub fn member_label(count: usize) -> String {
    match count {
        1 => "1 member".to_owned(),
        n => format!("{n} members"),
    }
}
