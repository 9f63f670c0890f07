//! Local Storage
//!
//! `window.localStorage` behind the domain's `KeyValueStore` trait.

use log::warn;
use meal_domain::session::{KeyValueStore, SessionStore};

use crate::api::{ApiError, ApiResult};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> ApiResult<Self> {
        let window = web_sys::window().ok_or_else(|| ApiError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{e:?}")))?
            .ok_or_else(|| ApiError::Storage("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("[STORAGE] Failed to write {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            warn!("[STORAGE] Failed to remove {key}: {e:?}");
        }
    }
}

pub fn session_store() -> ApiResult<SessionStore<LocalStorage>> {
    LocalStorage::open().map(SessionStore::new)
}
