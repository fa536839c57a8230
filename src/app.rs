//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::splash::Splash;
use crate::components::toasts::Toasts;
use crate::config::ClientConfig;
use crate::net::http::BrowserTransport;
use crate::pages::{
    chat::{ChatPage, ChatsPage},
    communities::{CommunitiesPage, CommunityPage},
    feed::FeedPage,
    groups::{GroupPage, GroupsPage},
    login::LoginPage,
    notifications::NotificationsPage,
    oauth_callback::OAuthCallbackPage,
    profile::ProfilePage,
    reels::ReelsPage,
    register::RegisterPage,
};
use crate::state::notices::NoticeState;
use crate::state::services::{Services, ServicesHandle, provide_services};
use crate::state::session::Session;

/// Root application component.
///
/// Builds the service bundle from compile-time config, provides it and the
/// notice queue as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    leptos::logging::log!("christful client using {}", config.api_base_url);
    let services = provide_services(Services::new(config, Session::browser(), BrowserTransport));
    provide_context(RwSignal::new(NoticeState::default()));
    install_focus_revalidation(services);

    view! {
        <Title text="Christful"/>

        <Router>
            <Splash/>
            <Toasts/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=OAuthCallbackPage/>
                <Route path=StaticSegment("") view=FeedPage/>
                <Route path=StaticSegment("reels") view=ReelsPage/>
                <Route path=StaticSegment("communities") view=CommunitiesPage/>
                <Route path=(StaticSegment("communities"), ParamSegment("id")) view=CommunityPage/>
                <Route path=StaticSegment("groups") view=GroupsPage/>
                <Route path=(StaticSegment("groups"), ParamSegment("id")) view=GroupPage/>
                <Route path=StaticSegment("chats") view=ChatsPage/>
                <Route path=(StaticSegment("chats"), ParamSegment("id")) view=ChatPage/>
                <Route path=StaticSegment("notifications") view=NotificationsPage/>
                <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
            </Routes>
        </Router>
    }
}

/// Forward window focus to the cache; it refetches only when the configured
/// policy enables focus revalidation.
fn install_focus_revalidation(services: ServicesHandle) {
    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::focus, move |_| {
            let cache = services.with_value(|s| s.cache.clone());
            leptos::task::spawn_local(async move { cache.on_focus().await });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = services;
    }
}
