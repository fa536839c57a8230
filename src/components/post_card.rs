//! One post in a feed, reel strip, or profile: media, likes, comments, and
//! delete for the author.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::posts::{add_comment, delete_post, toggle_like};
use crate::net::endpoints;
use crate::net::types::{CommentList, Post};
use crate::routes;
use crate::state::notices::NoticeState;
use crate::state::services::use_services;
use crate::util::identity::{has_liked, is_own_post};
use crate::util::outcome::{ActionMessages, spawn_action};
use crate::util::use_api::use_api;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let show_comments = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let (liked, own) = services.with_value(|s| (has_liked(&s.session, &post), is_own_post(&s.session, &post)));
    let like_count = post.likes.len();
    let post_id = post.id.clone();
    let author = post.author.clone().unwrap_or_default();
    let author_href = routes::profile(&author.id);
    let is_reel = post.kind == "reel";
    let content = (!post.content.is_empty()).then(|| post.content.clone());

    let comments_id = post_id.clone();
    let comments = use_api(move || show_comments.get().then(|| endpoints::post_comments(&comments_id)));

    let on_like = {
        let post_id = post_id.clone();
        let navigate = navigate.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let client = services.with_value(|s| s.client.clone());
            let post_id = post_id.clone();
            spawn_action(
                services,
                notices,
                navigate.clone(),
                busy,
                ActionMessages::failing_with("Could not update like."),
                async move { toggle_like(&client, &post_id).await },
                |_| {},
            );
        }
    };

    let on_delete = {
        let post_id = post_id.clone();
        let navigate = navigate.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let client = services.with_value(|s| s.client.clone());
            let post_id = post_id.clone();
            spawn_action(
                services,
                notices,
                navigate.clone(),
                busy,
                ActionMessages::failing_with("Could not delete post.").succeeding_with("Post deleted."),
                async move { delete_post(&client, &post_id).await },
                |_| {},
            );
        }
    };

    let on_comment = {
        let post_id = post_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let client = services.with_value(|s| s.client.clone());
            let post_id = post_id.clone();
            let content = draft.get_untracked();
            spawn_action(
                services,
                notices,
                navigate.clone(),
                busy,
                ActionMessages::failing_with("Could not add comment."),
                async move { add_comment(&client, &post_id, &content).await },
                move |_| draft.set(String::new()),
            );
        }
    };

    view! {
        <article class="post-card" class:post-card--reel=is_reel>
            <header class="post-card__header">
                <a class="post-card__author" href=author_href>
                    {author.avatar.clone().map(|src| view! { <img class="avatar avatar--small" src=src alt=""/> })}
                    <span>{author.display_name()}</span>
                </a>
                <span class="post-card__time">{post.created_at.clone().unwrap_or_default()}</span>
            </header>
            {content.map(|text| view! { <p class="post-card__content">{text}</p> })}
            {post.image.clone().map(|src| view! { <img class="post-card__media" src=src alt=""/> })}
            {post.video.clone().map(|src| view! { <video class="post-card__media" src=src controls=true></video> })}
            {post.audio.clone().map(|src| view! { <audio class="post-card__media" src=src controls=true></audio> })}
            <footer class="post-card__actions">
                <button class="btn" class:btn--active=liked disabled=move || busy.get() on:click=on_like>
                    {like_label(like_count, liked)}
                </button>
                <button class="btn" on:click=move |_| show_comments.update(|open| *open = !*open)>
                    {comments_label(post.comments_count)}
                </button>
                <Show when=move || own>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete.clone()>
                        "Delete"
                    </button>
                </Show>
            </footer>
            <Show when=move || show_comments.get()>
                <section class="post-card__comments">
                    <Show when=move || comments.is_loading()>
                        <p class="muted">"Loading comments..."</p>
                    </Show>
                    <ul>
                        {move || {
                            comments
                                .data::<CommentList>()
                                .map(|list| list.comments)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|comment| {
                                    let who = comment.author.map(|a| a.display_name()).unwrap_or_default();
                                    view! {
                                        <li class="comment">
                                            <strong>{who}</strong>
                                            " "
                                            <span>{comment.content}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <form class="comment-form" on:submit=on_comment.clone()>
                        <input
                            class="input"
                            type="text"
                            placeholder="Write a comment..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || busy.get()>"Send"</button>
                    </form>
                </section>
            </Show>
        </article>
    }
}

pub fn like_label(count: usize, liked: bool) -> String {
    let heart = if liked { "♥" } else { "♡" };
    format!("{heart} {count}")
}

pub fn comments_label(count: u64) -> String {
    match count {
        1 => "1 comment".to_owned(),
        n => format!("{n} comments"),
    }
}
