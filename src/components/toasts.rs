//! Stack of transient notices in the corner of the screen.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let scheduled = StoredValue::new(HashSet::<String>::new());

    Effect::new(move || {
        let ids: Vec<String> = notices.with(|n| n.items.iter().map(|item| item.id.clone()).collect());
        scheduled.update_value(|seen| seen.retain(|id| ids.contains(id)));
        for id in ids {
            if scheduled.with_value(|seen| seen.contains(&id)) {
                continue;
            }
            scheduled.update_value(|seen| {
                seen.insert(id.clone());
            });
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(NOTICE_DURATION).await;
                notices.update(|n| n.dismiss(&id));
            });
        }
    });

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    view! {
                        <div class=format!("toast {}", level_class(notice.level))>
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(&id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast--success",
        NoticeLevel::Info => "toast--info",
        NoticeLevel::Error => "toast--error",
    }
}
