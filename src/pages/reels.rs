//! Short-video reels with their own upload composer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::posts::PostKind;
use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::components::post_composer::PostComposer;
use crate::net::endpoints;
use crate::net::types::ReelList;
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[component]
pub fn ReelsPage() -> impl IntoView {
    install_unauth_redirect(use_services(), use_navigate());
    let reels = use_api(|| Some(endpoints::reels()));

    view! {
        <NavBar/>
        <main class="reels-page">
            <PostComposer kind=PostKind::Reel/>
            <Show when=move || reels.is_loading()>
                <p class="muted">"Loading reels..."</p>
            </Show>
            {move || reels.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load reels.")}</p>
            })}
            <div class="reels-page__strip">
                {move || {
                    reels.data::<ReelList>()
                        .map(|list| list.reels)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()
                }}
            </div>
        </main>
    }
}
