//! Composer for text posts, media posts, and reels.

#[cfg(test)]
#[path = "post_composer_test.rs"]
mod post_composer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::posts::{MediaKind, MediaUpload, PostDraft, PostKind, create_post};
use crate::state::notices::{Notice, NoticeState};
use crate::state::services::use_services;
use crate::util::outcome::{ActionMessages, spawn_action};

#[component]
pub fn PostComposer(#[prop(optional)] kind: PostKind) -> impl IntoView {
    let services = use_services();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let content = RwSignal::new(String::new());
    let media_kind = RwSignal::new(default_media_kind(kind));
    let media = RwSignal::new(None::<MediaUpload>);

    let on_file = move |ev: leptos::ev::Event| {
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
                media.set(None);
                return;
            };
            let chosen = media_kind.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::util::files::read_file(&file).await {
                    Ok(picked) => media.set(Some(MediaUpload {
                        kind: chosen,
                        file_name: picked.file_name,
                        content_type: picked.content_type,
                        bytes: picked.bytes,
                    })),
                    Err(e) => {
                        leptos::logging::warn!("{e}");
                        notices.update(|n| {
                            n.push(Notice::error("Could not read the selected file."));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = services.with_value(|s| s.client.clone());
        let draft = PostDraft { content: content.get_untracked(), kind, media: media.get_untracked() };
        spawn_action(
            services,
            notices,
            navigate.clone(),
            busy,
            ActionMessages::failing_with("Failed to create post.").succeeding_with(success_message(kind)),
            async move { create_post(&client, draft).await },
            move |_| {
                content.set(String::new());
                media.set(None);
            },
        );
    };

    view! {
        <form class="composer" on:submit=on_submit>
            <textarea
                class="input composer__text"
                placeholder=placeholder(kind)
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <div class="composer__media">
                <Show when=move || kind == PostKind::Post>
                    <select
                        class="input"
                        on:change=move |ev| {
                            media_kind.set(parse_media_kind(&event_target_value(&ev)));
                            media.set(None);
                        }
                    >
                        <option value="image">"Photo"</option>
                        <option value="video">"Video"</option>
                        <option value="audio">"Audio"</option>
                    </select>
                </Show>
                <input
                    class="input"
                    type="file"
                    accept=move || accept_attr(media_kind.get())
                    on:change=on_file
                />
                {move || media.get().map(|m| view! { <span class="composer__file">{m.file_name}</span> })}
            </div>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Posting..." } else { "Post" }}
            </button>
        </form>
    }
}

fn default_media_kind(kind: PostKind) -> MediaKind {
    match kind {
        PostKind::Post => MediaKind::Image,
        PostKind::Reel => MediaKind::Video,
    }
}

/// `accept` attribute for the file picker in the chosen media mode.
pub fn accept_attr(kind: MediaKind) -> String {
    format!("{}/*", kind.field_name())
}

pub fn parse_media_kind(value: &str) -> MediaKind {
    match value {
        "video" => MediaKind::Video,
        "audio" => MediaKind::Audio,
        _ => MediaKind::Image,
    }
}

fn placeholder(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Post => "Share something with the community...",
        PostKind::Reel => "Add a caption to your reel...",
    }
}

fn success_message(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Post => "Post created!",
        PostKind::Reel => "Reel uploaded!",
    }
}
