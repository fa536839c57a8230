//! Profile page: header, the user's posts, and (for the viewer's own
//! profile) the edit form and avatar upload.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::profile::{ProfileDraft, update_profile};
use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::net::endpoints;
use crate::net::types::{PostPage, UserProfile};
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::identity::is_own_profile;
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = use_services();
    install_unauth_redirect(services, use_navigate());
    let params = use_params_map();
    let profile_id = move || params.read().get("id");
    let profile = use_api(move || profile_id().map(|id| endpoints::user(&id)));
    let posts = use_api(move || profile_id().map(|id| endpoints::user_posts(&id)));
    let own = move || {
        profile_id().is_some_and(|id| services.with_value(|s| is_own_profile(&s.session, &id)))
    };

    view! {
        <NavBar/>
        <main class="profile-page">
            <Show when=move || profile.is_loading()>
                <p class="muted">"Loading profile..."</p>
            </Show>
            {move || profile.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load this profile.")}</p>
            })}
            {move || profile.data::<UserProfile>().map(|user| view! { <ProfileHeader user=user/> })}
            <Show when=own>
                {move || profile.data::<UserProfile>().map(|user| view! { <ProfileEditor user=user/> })}
            </Show>
            <section class="profile-page__posts">
                <h2>"Posts"</h2>
                {move || {
                    posts
                        .data::<PostPage>()
                        .map(|page| page.posts)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()
                }}
            </section>
        </main>
    }
}

#[component]
fn ProfileHeader(user: UserProfile) -> impl IntoView {
    let summary = user.summary();
    view! {
        <header class="profile-header card">
            {summary.avatar.clone().map(|src| view! { <img class="avatar avatar--large" src=src alt=""/> })}
            <h1>{summary.display_name()}</h1>
            <p>{user.bio.clone().unwrap_or_default()}</p>
            <span class="card__meta">{follow_counts(&user)}</span>
        </header>
    }
}

#[component]
fn ProfileEditor(user: UserProfile) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let first_name = RwSignal::new(user.first_name.clone());
    let last_name = RwSignal::new(user.last_name.clone());
    let bio = RwSignal::new(user.bio.clone().unwrap_or_default());
    let busy = RwSignal::new(false);

    let on_save = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let client = services.with_value(|s| s.client.clone());
            let draft = ProfileDraft {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                bio: bio.get_untracked(),
            };
            spawn_action(
                services,
                notices,
                navigate.clone(),
                busy,
                ActionMessages::failing_with("Failed to update profile.").succeeding_with("Profile updated!"),
                async move { update_profile(&client, &draft).await },
                |_| {},
            );
        }
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = crate::util::files::first_selected(&input) else {
                return;
            };
            let client = services.with_value(|s| s.client.clone());
            let action = async move {
                let picked = crate::util::files::read_file(&file)
                    .await
                    .map_err(|_| crate::actions::ActionError::Validation("Could not read the selected file.".to_owned()))?;
                let upload = crate::actions::profile::AvatarUpload {
                    file_name: picked.file_name,
                    content_type: picked.content_type,
                    bytes: picked.bytes,
                };
                crate::actions::profile::upload_avatar(&client, upload).await
            };
            spawn_action(
                services,
                notices,
                navigate.clone(),
                busy,
                ActionMessages::failing_with("Avatar upload failed.").succeeding_with("Profile picture updated!"),
                action,
                |_| {},
            );
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &navigate);
        }
    };

    view! {
        <section class="profile-editor card">
            <h2>"Edit profile"</h2>
            <form class="create-form" on:submit=on_save>
                <input
                    class="input"
                    type="text"
                    placeholder="First name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Last name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="Bio"
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
            <label class="profile-editor__avatar">
                "Profile picture"
                <input type="file" accept="image/*" disabled=move || busy.get() on:change=on_avatar/>
            </label>
        </section>
    }
}

pub fn follow_counts(user: &UserProfile) -> String {
    format!("{} followers · {} following", user.followers.len(), user.following.len())
}
