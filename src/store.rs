//! MetadataStore - in-memory JACK metadata per object UUID
//!
//! Mirrors the key/value properties the JACK server attaches to ports and
//! clients, so the patchbay can resolve pretty names, icons and grouping
//! hints without a server round-trip. The store applies the protocol's
//! wildcard clear rules on every change notification and exposes pure
//! queries that never fail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::keys;

/// Numeric handle JACK assigns to a port or client (`jack_uuid_t`).
///
/// 0 never identifies an object: it is the "all objects" wildcard in
/// [`MetadataStore::add`] and is never a key of the store.
pub type Uuid = u64;

type PropertyMap = HashMap<String, String>;

/// In-memory mapping from object UUID to its metadata properties.
///
/// The inner mapping is private so callers cannot bypass the wildcard
/// clear rules; all mutation goes through [`add`](Self::add),
/// [`remove_uuid`](Self::remove_uuid) and [`clear`](Self::clear).
///
/// Absence and "explicitly empty" are indistinguishable to query callers:
/// unknown UUIDs and unset keys both read as the empty string. This
/// mirrors the wire protocol, where clearing a property is expressed by
/// sending an empty value rather than a distinct delete message. An
/// empty string is consequently never stored as a real value.
///
/// The store itself is not synchronized. Hosts that receive JACK
/// property callbacks on the notification thread while querying from the
/// UI thread should use [`SharedMetadatas`](crate::SharedMetadatas),
/// which guards the whole store with one lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataStore {
    entries: HashMap<Uuid, PropertyMap>,
}

impl MetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a property change notification.
    ///
    /// Applies the JACK wildcard rules, in precedence order:
    ///
    /// 1. `uuid` 0: discard the entire store; `key` and `value` are ignored.
    /// 2. Empty `key`: clear every property of `uuid`; `value` is ignored.
    ///    The UUID itself stays known.
    /// 3. Non-empty `value`: insert or overwrite `key`.
    /// 4. Empty `value`: remove `key`, silently ignoring absent keys.
    ///
    /// Never fails; malformed and no-op calls are defined behaviour.
    pub fn add(&mut self, uuid: Uuid, key: &str, value: &str) {
        if uuid == 0 {
            debug!("wildcard clear, dropping all metadata");
            self.entries.clear();
            return;
        }

        let props = self.entries.entry(uuid).or_default();

        if key.is_empty() {
            debug!(uuid, "cleared all properties of uuid");
            props.clear();
        } else if !value.is_empty() {
            trace!(uuid, key, value, "property set");
            props.insert(key.to_owned(), value.to_owned());
        } else {
            trace!(uuid, key, "property removed");
            props.remove(key);
        }
    }

    /// Forget `uuid` and all its properties. No-op if unknown.
    ///
    /// Unlike `add(uuid, "", _)` this drops the UUID entry itself, so
    /// [`contains_uuid`](Self::contains_uuid) flips to `false`. Hosts use
    /// the difference to tell a stale-but-known object from one never
    /// seen.
    pub fn remove_uuid(&mut self, uuid: Uuid) {
        if self.entries.remove(&uuid).is_some() {
            debug!(uuid, "uuid removed");
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored value for `(uuid, key)`, or `""` when either is unknown.
    pub fn str_for_key(&self, uuid: Uuid, key: &str) -> &str {
        self.entries
            .get(&uuid)
            .and_then(|props| props.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Pretty name of `uuid`, or `""`.
    pub fn pretty_name(&self, uuid: Uuid) -> &str {
        self.str_for_key(uuid, keys::PRETTY_NAME)
    }

    /// Icon name of `uuid`, or `""`.
    pub fn icon_name(&self, uuid: Uuid) -> &str {
        self.str_for_key(uuid, keys::ICON_NAME)
    }

    /// Port group of `uuid`, or `""`.
    pub fn portgroup(&self, uuid: Uuid) -> &str {
        self.str_for_key(uuid, keys::PORT_GROUP)
    }

    /// Signal type of `uuid` ("AUDIO", "CV", ...), or `""`.
    pub fn signal_type(&self, uuid: Uuid) -> &str {
        self.str_for_key(uuid, keys::SIGNAL_TYPE)
    }

    /// Port order of `uuid`, if set and parseable.
    ///
    /// The protocol transports the order as a string; a value that does
    /// not parse as an integer is logged and treated as unset.
    pub fn order(&self, uuid: Uuid) -> Option<i32> {
        let value = self.str_for_key(uuid, keys::ORDER);
        if value.is_empty() {
            return None;
        }
        match value.parse() {
            Ok(order) => Some(order),
            Err(_) => {
                warn!(uuid, value, "order value is not an integer");
                None
            }
        }
    }

    /// Whether `uuid` has been seen. It may carry zero properties after
    /// an empty-key clear.
    pub fn contains_uuid(&self, uuid: Uuid) -> bool {
        self.entries.contains_key(&uuid)
    }

    /// All properties of `uuid`, or `None` if the UUID was never seen.
    pub fn properties(&self, uuid: Uuid) -> Option<&HashMap<String, String>> {
        self.entries.get(&uuid)
    }

    /// Iterate over every known UUID and its properties.
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, &HashMap<String, String>)> + '_ {
        self.entries.iter().map(|(uuid, props)| (*uuid, props))
    }

    /// Number of known UUIDs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no UUIDs at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
