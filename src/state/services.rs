//! Service bundle shared with every page through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `Services` at startup and provides it as a local
//! `StoredValue` (the bundle holds `Rc` handles and never leaves the UI
//! thread). Pages and hooks pull it with `use_services()`.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::state::resource::ResourceCache;
use crate::state::session::Session;

#[derive(Clone, Debug)]
pub struct Services {
    pub config: ClientConfig,
    pub session: Session,
    pub client: ApiClient,
    pub cache: ResourceCache,
}

impl Services {
    /// Wire the client and cache around one session and transport.
    pub fn new(config: ClientConfig, session: Session, transport: impl Transport + 'static) -> Self {
        let client = ApiClient::new(&config.api_base_url, transport, session.clone());
        let cache = ResourceCache::new(client.clone(), config.revalidate);
        Self { config, session, client, cache }
    }
}

pub type ServicesHandle = StoredValue<Services, LocalStorage>;

pub fn provide_services(services: Services) -> ServicesHandle {
    let handle = StoredValue::new_local(services);
    provide_context(handle);
    handle
}

/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}
