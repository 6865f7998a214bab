//! SharedMetadatas - thread-safe handle over the metadata store
//!
//! JACK delivers property change callbacks on its own notification thread
//! while the patchbay queries from the UI thread. The store itself is
//! unsynchronized, so this handle serializes both sides behind a single
//! `RwLock` guarding the whole store. No lock is ever held across a
//! callback: the store never calls out, and every query clones its result
//! before the guard drops.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::{MetadataStore, Uuid};

/// Cloneable, thread-safe view of a [`MetadataStore`].
///
/// Clones share the same underlying store. Mutations take the write
/// lock, queries the read lock; string queries return owned copies so no
/// borrow escapes the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedMetadatas {
    inner: Arc<RwLock<MetadataStore>>,
}

impl SharedMetadatas {
    /// Create a handle over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`MetadataStore::add`].
    pub fn add(&self, uuid: Uuid, key: &str, value: &str) {
        self.inner.write().add(uuid, key, value);
    }

    /// See [`MetadataStore::remove_uuid`].
    pub fn remove_uuid(&self, uuid: Uuid) {
        self.inner.write().remove_uuid(uuid);
    }

    /// See [`MetadataStore::clear`].
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// See [`MetadataStore::str_for_key`].
    pub fn str_for_key(&self, uuid: Uuid, key: &str) -> String {
        self.inner.read().str_for_key(uuid, key).to_owned()
    }

    /// See [`MetadataStore::pretty_name`].
    pub fn pretty_name(&self, uuid: Uuid) -> String {
        self.inner.read().pretty_name(uuid).to_owned()
    }

    /// See [`MetadataStore::icon_name`].
    pub fn icon_name(&self, uuid: Uuid) -> String {
        self.inner.read().icon_name(uuid).to_owned()
    }

    /// See [`MetadataStore::portgroup`].
    pub fn portgroup(&self, uuid: Uuid) -> String {
        self.inner.read().portgroup(uuid).to_owned()
    }

    /// See [`MetadataStore::signal_type`].
    pub fn signal_type(&self, uuid: Uuid) -> String {
        self.inner.read().signal_type(uuid).to_owned()
    }

    /// See [`MetadataStore::order`].
    pub fn order(&self, uuid: Uuid) -> Option<i32> {
        self.inner.read().order(uuid)
    }

    /// See [`MetadataStore::contains_uuid`].
    pub fn contains_uuid(&self, uuid: Uuid) -> bool {
        self.inner.read().contains_uuid(uuid)
    }

    /// Copy of all properties of `uuid`, or `None` if it was never seen.
    pub fn properties(&self, uuid: Uuid) -> Option<HashMap<String, String>> {
        self.inner.read().properties(uuid).cloned()
    }

    /// Number of known UUIDs.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the store holds no UUIDs at all.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current state, for persistence or diffing.
    pub fn snapshot(&self) -> MetadataStore {
        self.inner.read().clone()
    }
}
