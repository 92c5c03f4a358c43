use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use collectd_types::Part;
use collectd_wire::{Cursor, PartHeader, part_type};

use crate::content;
use crate::error::DecodeError;

/// Signature shared by every content decoder.
///
/// The cursor holds exactly `header.content_len()` bytes when called from
/// the packet decoder.
pub type DecodeFn = fn(PartHeader, &mut Cursor<'_>) -> Result<Part, DecodeError>;

/// The built-in table, built on first use and never mutated afterwards.
static STANDARD: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new()
        .register(part_type::HOSTNAME, content::decode_text)
        .register(part_type::PLUGIN, content::decode_text)
        .register(part_type::PLUGIN_INSTANCE, content::decode_text)
        .register(part_type::TYPE, content::decode_text)
        .register(part_type::TYPE_INSTANCE, content::decode_text)
        .register(part_type::VALUES, content::decode_value_list)
        .register(part_type::TIME_HR, content::decode_high_res)
        .register(part_type::INTERVAL_HR, content::decode_high_res)
        .register(part_type::MESSAGE, content::decode_text)
});

/// Mapping from part type code to the decoder for its content.
///
/// Lookup is by exact code. Codes with no entry are skipped by the
/// packet decoder, which is how unknown and unsupported parts (signatures,
/// encrypted blocks, future additions) pass through harmlessly.
///
/// ```text
/// ┌────────┬─────────────────┬──────────────────┐
/// │ Code   │ Part            │ Decoder          │
/// ├────────┼─────────────────┼──────────────────┤
/// │ 0x0000 │ Hostname        │ decode_text      │
/// │ 0x0002 │ Plugin          │ decode_text      │
/// │ 0x0003 │ Plugin instance │ decode_text      │
/// │ 0x0004 │ Type            │ decode_text      │
/// │ 0x0005 │ Type instance   │ decode_text      │
/// │ 0x0006 │ Values          │ decode_value_list│
/// │ 0x0008 │ Time (hi-res)   │ decode_high_res  │
/// │ 0x0009 │ Interval (hr)   │ decode_high_res  │
/// │ 0x0100 │ Message         │ decode_text      │
/// └────────┴─────────────────┴──────────────────┘
/// ```
///
/// Registries are plain values: build an alternate one with
/// [`new`](Self::new) and [`register`](Self::register) and hand it to a
/// [`PacketDecoder`](crate::PacketDecoder).
#[derive(Clone, Default)]
pub struct Registry {
    decoders: HashMap<u16, DecodeFn>,
}

impl Registry {
    /// An empty registry. Every part decoded against it is skipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table shown above, shared process-wide.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// The standard table plus the pre-5.0 low-resolution codes `TIME`
    /// (0x0001) and `INTERVAL` (0x0007), decoded as plain numbers.
    pub fn with_plain_time() -> Self {
        Self::standard()
            .clone()
            .register(part_type::TIME, content::decode_number)
            .register(part_type::INTERVAL, content::decode_number)
    }

    /// Map `type_code` to `decoder`, replacing any previous entry.
    #[must_use]
    pub fn register(mut self, type_code: u16, decoder: DecodeFn) -> Self {
        self.decoders.insert(type_code, decoder);
        self
    }

    pub fn get(&self, type_code: u16) -> Option<DecodeFn> {
        self.decoders.get(&type_code).copied()
    }

    pub fn contains(&self, type_code: u16) -> bool {
        self.decoders.contains_key(&type_code)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered type codes in ascending order.
    pub fn type_codes(&self) -> Vec<u16> {
        let mut codes: Vec<u16> = self.decoders.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("type_codes", &self.type_codes())
            .finish()
    }
}
