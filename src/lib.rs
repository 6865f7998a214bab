//! jackmeta - In-memory cache of JACK metadata for patchbay UIs
//!
//! JACK attaches free-form key/value properties (pretty names, icons, port
//! groups, signal types) to its ports and clients, addressed by numeric
//! UUIDs. This crate mirrors those properties locally so a patchbay can
//! resolve display information on every redraw without a server round-trip.
//!
//! The cache implements the protocol's wildcard clear rules: a change
//! notification for UUID 0 wipes the whole cache, an empty key wipes one
//! UUID's properties, and an empty value deletes a single property.
//!
//! ```
//! use jackmeta::{keys, MetadataStore};
//!
//! let mut store = MetadataStore::new();
//! store.add(7, keys::PRETTY_NAME, "Mic 1");
//! assert_eq!(store.pretty_name(7), "Mic 1");
//!
//! // The protocol expresses "clear" as an empty value
//! store.add(7, keys::PRETTY_NAME, "");
//! assert_eq!(store.pretty_name(7), "");
//! ```
//!
//! [`MetadataStore`] is plain data for single-threaded hosts; use
//! [`SharedMetadatas`] when the JACK notification thread and the UI thread
//! are distinct.

pub mod keys;
pub mod shared;
pub mod store;

pub use shared::SharedMetadatas;
pub use store::{MetadataStore, Uuid};
