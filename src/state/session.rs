//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a bearer token plus user id held in durable key-value
//! storage. `Session` is injected into `ApiClient` and provided to pages via
//! context; nothing reads storage through globals. Every read goes back to
//! storage, so a logout from another interaction is observed by the next
//! request without any pub/sub.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_AVATAR_KEY: &str = "userAvatar";

/// Durable string key-value storage.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Reads return `None` and writes are dropped when no
/// browser storage is reachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed localStorage call (quota exceeded, private mode). Returns
/// whether the call went through.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn storage_succeeded<E: std::fmt::Debug>(op: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("localStorage {op} of {key} failed: {e:?}");
            false
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                storage_succeeded("write", key, storage.set_item(key, value));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                storage_succeeded("removal", key, storage.remove_item(key));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Handle to the current session. Cheap to clone; all clones share storage.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn SessionStorage>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("user_id", &self.user_id())
            .finish()
    }
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Rc::new(storage) }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Fresh in-memory session with nothing stored.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Store the bearer token and user id after login, signup, or OAuth.
    pub fn set_session(&self, token: &str, user_id: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(USER_ID_KEY, user_id);
    }

    pub fn token(&self) -> Option<String> {
        non_empty(self.storage.get(TOKEN_KEY))
    }

    pub fn user_id(&self) -> Option<String> {
        non_empty(self.storage.get(USER_ID_KEY))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Cache display fields used by the navigation chrome.
    pub fn set_display(&self, name: Option<&str>, avatar: Option<&str>) {
        match name {
            Some(name) => self.storage.set(USER_NAME_KEY, name),
            None => self.storage.remove(USER_NAME_KEY),
        }
        match avatar {
            Some(avatar) => self.storage.set(USER_AVATAR_KEY, avatar),
            None => self.storage.remove(USER_AVATAR_KEY),
        }
    }

    pub fn display_name(&self) -> Option<String> {
        non_empty(self.storage.get(USER_NAME_KEY))
    }

    pub fn avatar_url(&self) -> Option<String> {
        non_empty(self.storage.get(USER_AVATAR_KEY))
    }

    /// Forget the credential and cached display fields.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY, USER_AVATAR_KEY] {
            self.storage.remove(key);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
