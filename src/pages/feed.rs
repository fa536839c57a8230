//! Home feed: composer on top, paginated posts below.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed is keyed by page (`/posts?page=N`), so paging swaps the
//! subscription and a page already seen renders from cache. Creating,
//! liking, or deleting a post invalidates page 1.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::components::post_composer::PostComposer;
use crate::net::endpoints;
use crate::net::types::{PageInfo, PostPage};
use crate::state::services::use_services;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[component]
pub fn FeedPage() -> impl IntoView {
    let services = use_services();
    install_unauth_redirect(services, use_navigate());
    let page = RwSignal::new(1_u32);
    let feed = use_api(move || Some(endpoints::feed(page.get())));
    let info = move || feed.data::<PostPage>().map(|p| p.page).unwrap_or_default();

    view! {
        <NavBar/>
        <main class="feed-page">
            <PostComposer/>
            <Show when=move || feed.is_loading()>
                <p class="muted">"Loading posts..."</p>
            </Show>
            {move || feed.error().map(|e| view! {
                <p class="error">{e.user_message("Could not load the feed.")}</p>
            })}
            <div class="feed-page__posts">
                {move || {
                    feed.data::<PostPage>()
                        .map(|p| p.posts)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()
                }}
            </div>
            <nav class="pager">
                {move || page_links(&info()).0.map(|prev| view! {
                    <button class="btn" on:click=move |_| page.set(prev)>"Newer"</button>
                })}
                <span class="pager__label">{move || format!("Page {}", page.get())}</span>
                {move || page_links(&info()).1.map(|next| view! {
                    <button class="btn" on:click=move |_| page.set(next)>"Older"</button>
                })}
            </nav>
        </main>
    }
}

/// Previous and next page numbers reachable from `info`.
pub fn page_links(info: &PageInfo) -> (Option<u32>, Option<u32>) {
    let page = info.page.max(1);
    let prev = (page > 1).then(|| page - 1);
    let next = info.has_more().then(|| page + 1);
    (prev, next)
}
