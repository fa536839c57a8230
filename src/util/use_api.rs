//! `use_api`: a component's reactive view of one cached GET resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_api(move || Some(endpoints::feed(page.get())))`. The key
//! closure is tracked; whenever it yields a different key the hook subscribes
//! to the new entry before releasing the old one, so a shared entry is never
//! dropped and refetched in between. `None` defers the request.
//!
//! The cache listener writes into an `RwSignal<ResourceState>`, so views just
//! read `resource.state()` or `resource.data::<T>()`. A 401 on the read path
//! has already cleared the session; the listener then replaces the current
//! route with the login screen.

#[cfg(test)]
#[path = "use_api_test.rs"]
mod use_api_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde::de::DeserializeOwned;

use crate::net::endpoints::ResourceKey;
use crate::net::error::ApiError;
use crate::routes;
use crate::state::resource::{ResourceCache, ResourceState, Subscription};
use crate::state::services::{ServicesHandle, use_services};

#[derive(Clone, Copy)]
pub struct ApiResource {
    state: RwSignal<ResourceState>,
    key: RwSignal<Option<ResourceKey>>,
    services: ServicesHandle,
}

impl ApiResource {
    pub fn state(&self) -> ResourceState {
        self.state.get()
    }

    /// Typed data; `None` while loading or when the body has another shape.
    pub fn data<T: DeserializeOwned>(&self) -> Option<T> {
        self.state.with(|s| match s.decode::<T>() {
            Ok(data) => data,
            Err(e) => {
                leptos::logging::warn!("resource decode failed: {e}");
                None
            }
        })
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn is_validating(&self) -> bool {
        self.state.with(|s| s.is_validating)
    }

    /// Refetch the current key; every subscriber sees the new data.
    pub fn mutate(&self) {
        let Some(key) = self.key.get_untracked() else {
            return;
        };
        let cache = self.services.with_value(|s| s.cache.clone());
        spawn_refresh(cache, key, false);
    }
}

pub fn use_api<F>(key_fn: F) -> ApiResource
where
    F: Fn() -> Option<ResourceKey> + 'static,
{
    let services = use_services();
    let state = RwSignal::new(ResourceState::default());
    let current = RwSignal::new(None::<ResourceKey>);
    let subscription = StoredValue::new_local(None::<Subscription>);
    let navigate = use_navigate();

    Effect::new(move |_| {
        let key = key_fn();
        let subscribed = subscription.with_value(Option::is_some);
        if !needs_resubscribe(subscribed, current.get_untracked().as_ref(), key.as_ref()) {
            return;
        }
        let cache = services.with_value(|s| s.cache.clone());
        let next = cache.subscribe(key.clone());
        let navigate = navigate.clone();
        next.on_change(move |fresh| {
            state.set(fresh.clone());
            if let Some(path) = redirect_for(fresh) {
                navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
        state.set(next.state());
        subscription.set_value(Some(next));
        current.set(key.clone());
        if let Some(key) = key {
            spawn_refresh(cache, key, true);
        }
    });

    on_cleanup(move || {
        let _ = subscription.try_update_value(Option::take);
    });

    ApiResource { state, key: current, services }
}

/// Whether the effect must swap to a new subscription. The first run always
/// subscribes, even for a `None` key.
fn needs_resubscribe(subscribed: bool, current: Option<&ResourceKey>, next: Option<&ResourceKey>) -> bool {
    !subscribed || current != next
}

/// Route to leave for when a read comes back 401.
fn redirect_for(state: &ResourceState) -> Option<&'static str> {
    state
        .error
        .as_ref()
        .is_some_and(ApiError::is_unauthorized)
        .then_some(routes::LOGIN)
}

/// Run a first load (`initial`) or a revalidation on the browser executor.
fn spawn_refresh(cache: ResourceCache, key: ResourceKey, initial: bool) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if initial {
            cache.load(&key).await;
        } else {
            cache.revalidate(&key).await;
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cache, key, initial);
    }
}
