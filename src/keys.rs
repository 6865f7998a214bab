//! Well-known JACK metadata property keys
//!
//! JACK namespaces its standard metadata keys under a common URI prefix.
//! These constants must match what the server sends byte-for-byte: they are
//! used as map keys that compare equal to externally supplied strings.
//! Arbitrary custom keys outside this set are equally valid and stored
//! untouched.

/// Namespace prefix shared by all well-known JACK metadata keys.
pub const PREFIX: &str = "http://jackaudio.org/metadata/";

macro_rules! jack_key {
    ($suffix:literal) => {
        concat!("http://jackaudio.org/metadata/", $suffix)
    };
}

/// Hardware connection state of a physical port.
pub const CONNECTED: &str = jack_key!("connected");
/// Event types a MIDI port sends or accepts.
pub const EVENT_TYPES: &str = jack_key!("event-types");
/// Set when the object represents a physical hardware device.
pub const HARDWARE: &str = jack_key!("hardware");
/// Large icon for a client (base64-encoded PNG).
pub const ICON_LARGE: &str = jack_key!("icon-large");
/// Freedesktop icon name for a client.
pub const ICON_NAME: &str = jack_key!("icon-name");
/// Small icon for a client (base64-encoded PNG).
pub const ICON_SMALL: &str = jack_key!("icon-small");
/// Display order of a port among its siblings, an integer as a string.
pub const ORDER: &str = jack_key!("order");
/// Port group (e.g. a stereo pair) the port belongs to.
pub const PORT_GROUP: &str = jack_key!("port-group");
/// Human-readable name shown instead of the port or client name.
pub const PRETTY_NAME: &str = jack_key!("pretty-name");
/// Signal type carried by an audio port ("AUDIO" or "CV").
pub const SIGNAL_TYPE: &str = jack_key!("signal-type");

/// All well-known keys, for collaborators that filter which properties
/// to request or forward.
pub const WELL_KNOWN: [&str; 10] = [
    CONNECTED,
    EVENT_TYPES,
    HARDWARE,
    ICON_LARGE,
    ICON_NAME,
    ICON_SMALL,
    ORDER,
    PORT_GROUP,
    PRETTY_NAME,
    SIGNAL_TYPE,
];

/// Whether `key` is one of the well-known JACK metadata keys.
pub fn is_well_known(key: &str) -> bool {
    WELL_KNOWN.contains(&key)
}
