//! Brand splash shown once while the app boots.

use leptos::prelude::*;

use crate::state::services::use_services;

#[component]
pub fn Splash() -> impl IntoView {
    let visible = RwSignal::new(true);
    let duration = use_services().with_value(|s| s.config.splash_duration);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(duration).await;
        visible.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
        visible.set(false);
    }

    view! {
        <Show when=move || visible.get()>
            <div class="splash">
                <span class="splash__logo">"Christful"</span>
                <span class="splash__tagline">"Faith, fellowship, and community"</span>
            </div>
        </Show>
    }
}
