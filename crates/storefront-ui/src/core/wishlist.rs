//! Persisted wishlist of product identifiers.
//!
//! # Design
//! - Storage is abstracted behind [`KeyValueStore`]; the browser backs it with
//!   `LocalStorage`, tests use [`MemoryStorage`].
//! - Loaded once at startup; malformed or absent data yields an empty set.
//! - Every toggle writes the full set back immediately.

use std::collections::{BTreeSet, HashMap};

use storefront_models::ProductId;
use tracing::{debug, warn};

use crate::core::config::DEFAULT_WISHLIST_KEY;
use crate::core::error::StorageError;

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::Read`] when the backend is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::Write`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`] that also counts writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Seed a store with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Current raw value under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Set of wishlisted product ids bound to its storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wishlist {
    key: String,
    ids: BTreeSet<ProductId>,
}

impl Default for Wishlist {
    fn default() -> Self {
        Self {
            key: DEFAULT_WISHLIST_KEY.to_string(),
            ids: BTreeSet::new(),
        }
    }
}

impl Wishlist {
    /// Load the wishlist persisted under `key`; any failure yields an empty set.
    #[must_use]
    pub fn load(storage: &impl KeyValueStore, key: &str) -> Self {
        let parsed = storage
            .get(key)
            .and_then(|raw| parse_ids(key, raw.as_deref()));
        let ids = match parsed {
            Ok(ids) => ids,
            Err(err) => {
                warn!(error = %err, "wishlist storage unreadable; starting empty");
                BTreeSet::new()
            }
        };
        debug!(key, count = ids.len(), "wishlist loaded");
        Self {
            key: key.to_string(),
            ids,
        }
    }

    /// Whether `id` is wishlisted.
    #[must_use]
    pub fn has(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`, persist the whole set, and return the new membership.
    pub fn toggle(&mut self, id: ProductId, storage: &mut impl KeyValueStore) -> bool {
        let member = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        if let Err(err) = self.persist(storage) {
            warn!(error = %err, product_id = %id, "wishlist write failed");
        }
        member
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is wishlisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self, storage: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let ids: Vec<u64> = self.ids.iter().map(|id| id.0).collect();
        let encoded = serde_json::to_string(&ids).map_err(|err| StorageError::Write {
            key: self.key.clone(),
            detail: err.to_string(),
        })?;
        storage.set(&self.key, &encoded)
    }
}

fn parse_ids(key: &str, raw: Option<&str>) -> Result<BTreeSet<ProductId>, StorageError> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(BTreeSet::new());
    };
    serde_json::from_str::<Vec<ProductId>>(raw)
        .map(|ids| ids.into_iter().collect())
        .map_err(|err| StorageError::Malformed {
            key: key.to_string(),
            detail: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectingStorage;

    impl KeyValueStore for RejectingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                detail: "denied".to_string(),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                detail: "quota".to_string(),
            })
        }
    }

    #[test]
    fn loads_persisted_ids() {
        let storage = MemoryStorage::with_entry("wishlist", "[3, 1]");
        let wishlist = Wishlist::load(&storage, "wishlist");
        assert!(wishlist.has(ProductId(1)));
        assert!(wishlist.has(ProductId(3)));
        assert!(!wishlist.has(ProductId(2)));
        assert_eq!(wishlist.len(), 2);
    }

    #[test]
    fn absent_or_corrupt_storage_is_empty() {
        assert!(Wishlist::load(&MemoryStorage::default(), "wishlist").is_empty());
        let corrupt = MemoryStorage::with_entry("wishlist", "{\"oops\":");
        assert!(Wishlist::load(&corrupt, "wishlist").is_empty());
        let wrong_shape = MemoryStorage::with_entry("wishlist", "[\"a\", \"b\"]");
        assert!(Wishlist::load(&wrong_shape, "wishlist").is_empty());
        assert!(Wishlist::load(&RejectingStorage, "wishlist").is_empty());
    }

    #[test]
    fn toggle_twice_restores_membership_and_persists_each_time() {
        let mut storage = MemoryStorage::default();
        let mut wishlist = Wishlist::load(&storage, "wishlist");

        assert!(wishlist.toggle(ProductId(5), &mut storage));
        assert_eq!(storage.raw("wishlist"), Some("[5]"));
        assert!(!wishlist.toggle(ProductId(5), &mut storage));
        assert_eq!(storage.raw("wishlist"), Some("[]"));
        assert!(!wishlist.has(ProductId(5)));
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn every_toggle_writes_the_full_set() {
        let mut storage = MemoryStorage::with_entry("favs", "[2]");
        let mut wishlist = Wishlist::load(&storage, "favs");
        wishlist.toggle(ProductId(9), &mut storage);
        wishlist.toggle(ProductId(4), &mut storage);
        assert_eq!(storage.raw("favs"), Some("[2,4,9]"));

        let reloaded = Wishlist::load(&storage, "favs");
        assert_eq!(reloaded, wishlist);
    }

    #[test]
    fn write_failures_keep_in_memory_state() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.toggle(ProductId(1), &mut RejectingStorage));
        assert!(wishlist.has(ProductId(1)));
    }
}
