//! Persistence and environment helpers for the app shell.

use crate::core::config::{CONFIG_OVERRIDE_KEY, StorefrontConfig};
use crate::core::error::StorageError;
use crate::core::wishlist::KeyValueStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`KeyValueStore`] backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
            .inspect_err(|err| log_storage_error("get", key, &err.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
            .inspect_err(|err| log_storage_error("set", key, &err.to_string()))
    }
}

/// Load runtime config, honouring an optional override in local storage.
pub(crate) fn load_config() -> StorefrontConfig {
    let raw = BrowserStorage.get(CONFIG_OVERRIDE_KEY).ok().flatten();
    StorefrontConfig::from_override(raw.as_deref())
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
