//! Keyed cache of GET resources with deduplicated in-flight requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages subscribe to a `ResourceKey` (request path) and read the freshest
//! known value. All subscribers of one key share one entry and at most one
//! in-flight request. Entries live as long as their longest-lived
//! subscription; dropping the last one removes the entry. There is no size
//! bound and no TTL.
//!
//! DESIGN
//! ======
//! The client runs on a single-threaded event loop, so entries sit behind
//! `Rc<RefCell<..>>`. No borrow is held across an await: a fetch is stored as
//! a `Shared` future tagged with a generation, and only the awaiter whose
//! generation still matches writes the result back.
//!
//! A `None` key is inert: it never touches the network and reports
//! all-default state. Pages use it to defer a request until a dependency
//! (for example a route id) is known.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::{LocalBoxFuture, Shared, join_all};
use serde::de::DeserializeOwned;

use crate::config::{MAX_ERROR_RETRIES, RevalidatePolicy};
use crate::net::api::{ApiClient, decode};
use crate::net::endpoints::ResourceKey;
use crate::net::error::ApiError;

type FetchResult = Result<serde_json::Value, ApiError>;
type SharedFetch = Shared<LocalBoxFuture<'static, FetchResult>>;
type Listener = Rc<dyn Fn(&ResourceState)>;

/// What a subscriber sees for one key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceState {
    /// Last successfully parsed body.
    pub data: Option<serde_json::Value>,
    /// Last fetch failure.
    pub error: Option<ApiError>,
    /// No data yet and the first fetch is in flight.
    pub is_loading: bool,
    /// Any fetch for this key is in flight.
    pub is_validating: bool,
}

impl ResourceState {
    /// Decode `data` into a DTO. `Ok(None)` while no data has arrived.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the cached body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, ApiError> {
        self.data.clone().map(decode).transpose()
    }
}

#[derive(Default)]
struct Entry {
    data: Option<serde_json::Value>,
    error: Option<ApiError>,
    inflight: Option<(u64, SharedFetch)>,
    subscribers: usize,
    listeners: Vec<(u64, Listener)>,
}

impl Entry {
    fn state(&self) -> ResourceState {
        let in_flight = self.inflight.is_some();
        ResourceState {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: in_flight && self.data.is_none(),
            is_validating: in_flight,
        }
    }
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<ResourceKey, Entry>,
    next_id: u64,
}

impl CacheInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared resource cache. Clones refer to the same entries.
#[derive(Clone)]
pub struct ResourceCache {
    inner: Rc<RefCell<CacheInner>>,
    client: ApiClient,
    policy: RevalidatePolicy,
}

impl std::fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceCache")
            .field("entries", &self.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ResourceCache {
    pub fn new(client: ApiClient, policy: RevalidatePolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CacheInner::default())),
            client,
            policy,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Register interest in `key`. A `None` key yields an inert subscription.
    pub fn subscribe(&self, key: Option<ResourceKey>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        if let Some(key) = key.as_ref() {
            inner.entries.entry(key.clone()).or_default().subscribers += 1;
        }
        Subscription { cache: self.clone(), key, id }
    }

    /// Current state for `key`; default when the key is not cached.
    pub fn snapshot(&self, key: &ResourceKey) -> ResourceState {
        self.inner
            .borrow()
            .entries
            .get(key)
            .map(Entry::state)
            .unwrap_or_default()
    }

    pub fn is_cached(&self, key: &ResourceKey) -> bool {
        self.inner.borrow().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Refetch `key` with a new request, superseding any request already in
    /// flight. Previous data stays visible until the new response lands.
    /// Uncached keys are ignored.
    pub async fn revalidate(&self, key: &ResourceKey) -> ResourceState {
        match self.begin(key, true) {
            Some((generation, fetch)) => self.drive(key, generation, fetch).await,
            None => ResourceState::default(),
        }
    }

    /// First load for `key`: joins the request in flight, returns the cached
    /// state when the entry holds data or an error, and fetches otherwise.
    pub async fn load(&self, key: &ResourceKey) -> ResourceState {
        match self.begin(key, false) {
            Some((generation, fetch)) => self.drive(key, generation, fetch).await,
            None => self.snapshot(key),
        }
    }

    /// Pick the request to await for `key`. `fresh` always starts a new one
    /// under a new generation; otherwise an in-flight request is joined and a
    /// settled entry needs no request at all.
    fn begin(&self, key: &ResourceKey, fresh: bool) -> Option<(u64, SharedFetch)> {
        let (generation, fetch) = {
            let mut inner = self.inner.borrow_mut();
            let generation = inner.next_id();
            let entry = inner.entries.get_mut(key)?;
            if !fresh {
                if let Some((existing, fetch)) = &entry.inflight {
                    return Some((*existing, fetch.clone()));
                }
                if entry.data.is_some() || entry.error.is_some() {
                    return None;
                }
            }
            let fetch = self.fetch(key).boxed_local().shared();
            entry.inflight = Some((generation, fetch.clone()));
            (generation, fetch)
        };
        self.notify(key);
        Some((generation, fetch))
    }

    /// Await `fetch` and store its result. When a newer request replaced it
    /// meanwhile, the result is dropped and the newer request is awaited.
    async fn drive(&self, key: &ResourceKey, mut generation: u64, mut fetch: SharedFetch) -> ResourceState {
        loop {
            let result = fetch.await;
            self.settle(key, generation, result);
            let newer = self
                .inner
                .borrow()
                .entries
                .get(key)
                .and_then(|entry| entry.inflight.clone())
                .filter(|(current, _)| *current != generation);
            match newer {
                Some((current, next)) => (generation, fetch) = (current, next),
                None => return self.snapshot(key),
            }
        }
    }

    /// Revalidate every listed key that is currently cached.
    pub async fn invalidate(&self, keys: &[ResourceKey]) {
        let live: Vec<ResourceKey> = keys.iter().filter(|key| self.is_cached(key)).cloned().collect();
        join_all(live.iter().map(|key| self.revalidate(key))).await;
    }

    /// Window regained focus. Refetches live keys only when the policy asks
    /// for it.
    pub async fn on_focus(&self) {
        if !self.policy.revalidate_on_focus {
            return;
        }
        let keys: Vec<ResourceKey> = self.inner.borrow().entries.keys().cloned().collect();
        join_all(keys.iter().map(|key| self.revalidate(key))).await;
    }

    fn fetch(&self, key: &ResourceKey) -> impl Future<Output = FetchResult> + 'static {
        let client = self.client.clone();
        let path = key.as_str().to_owned();
        let retries = if self.policy.retry_on_error { MAX_ERROR_RETRIES } else { 0 };
        async move {
            let mut attempt = 0;
            loop {
                match client.get(&path).await {
                    Err(e) if attempt < retries && !e.is_unauthorized() => {
                        attempt += 1;
                        leptos::logging::log!("retrying {path} ({attempt}/{retries}) after: {e}");
                        #[cfg(feature = "csr")]
                        gloo_timers::future::sleep(std::time::Duration::from_millis(500 << attempt)).await;
                    }
                    result => return result,
                }
            }
        }
    }

    fn settle(&self, key: &ResourceKey, generation: u64, result: FetchResult) {
        {
            let mut inner = self.inner.borrow_mut();
            let Some(entry) = inner.entries.get_mut(key) else {
                return;
            };
            if !matches!(entry.inflight, Some((current, _)) if current == generation) {
                return;
            }
            entry.inflight = None;
            match result {
                Ok(data) => {
                    entry.data = Some(data);
                    entry.error = None;
                }
                Err(e) => entry.error = Some(e),
            }
        }
        self.notify(key);
    }

    fn notify(&self, key: &ResourceKey) {
        let (state, listeners) = {
            let inner = self.inner.borrow();
            let Some(entry) = inner.entries.get(key) else {
                return;
            };
            let listeners: Vec<Listener> = entry.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (entry.state(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }

    fn add_listener(&self, key: &ResourceKey, id: u64, listener: Listener) {
        if let Some(entry) = self.inner.borrow_mut().entries.get_mut(key) {
            entry.listeners.push((id, listener));
        }
    }

    fn release(&self, key: &ResourceKey, id: u64) {
        let mut inner = self.inner.borrow_mut();
        let Some(entry) = inner.entries.get_mut(key) else {
            return;
        };
        entry.listeners.retain(|(owner, _)| *owner != id);
        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers == 0 {
            inner.entries.remove(key);
        }
    }
}

/// One subscriber's handle on a cache entry. Dropping it releases the entry.
pub struct Subscription {
    cache: ResourceCache,
    key: Option<ResourceKey>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Subscription {
    pub fn key(&self) -> Option<&ResourceKey> {
        self.key.as_ref()
    }

    pub fn state(&self) -> ResourceState {
        self.key
            .as_ref()
            .map(|key| self.cache.snapshot(key))
            .unwrap_or_default()
    }

    /// Call `listener` with the fresh state after every change to the entry.
    pub fn on_change(&self, listener: impl Fn(&ResourceState) + 'static) {
        if let Some(key) = self.key.as_ref() {
            self.cache.add_listener(key, self.id, Rc::new(listener));
        }
    }

    /// Load the entry if nothing is known yet, or join the request in flight.
    /// Entries holding data or an error are returned as-is.
    pub async fn ready(&self) -> ResourceState {
        match self.key.as_ref() {
            Some(key) => self.cache.load(key).await,
            None => ResourceState::default(),
        }
    }

    /// Issue a new request for this key and update every subscriber. A
    /// request already in flight is superseded and its response dropped.
    pub async fn mutate(&self) -> ResourceState {
        match self.key.as_ref() {
            Some(key) => self.cache.revalidate(key).await,
            None => ResourceState::default(),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(key) = self.key.as_ref() {
            self.cache.release(key, self.id);
        }
    }
}
