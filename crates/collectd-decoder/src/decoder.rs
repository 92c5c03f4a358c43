use collectd_types::Part;
use collectd_wire::{Cursor, PartHeader};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::registry::Registry;

/// Decode one collectd datagram with the standard registry.
///
/// Shorthand for `PacketDecoder::default().decode(buf)`.
///
/// # Errors
///
/// See [`PacketDecoder::decode`].
pub fn decode_packet(buf: &[u8]) -> Result<Vec<Part>, DecodeError> {
    PacketDecoder::default().decode(buf)
}

/// Synchronous decoder for a complete in-memory datagram.
///
/// Walks the buffer part by part:
///
///   1. **Header**: read the 4-byte type code / length pair.
///   2. **Bound**: split off exactly `length - 4` content bytes.
///   3. **Dispatch**: look the type code up in the registry. Known codes
///      run their content decoder over the bounded bytes, which must all
///      be consumed; unknown codes are skipped without producing a part.
///   4. **Repeat** until the buffer is exactly exhausted.
///
/// Any error stops the walk and is returned as-is; parts decoded before
/// the failure are dropped.
///
/// ```text
///   Scanning ──(part or skip)──► Scanning
///      │                            │
///      └──(buffer empty)──► Done    └──(error)──► Failed
/// ```
///
/// The decoder borrows its registry and holds no other state, so one
/// instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use collectd_decoder::{PacketDecoder, Registry};
///
/// // HOSTNAME "web01"
/// let datagram = [0x00, 0x00, 0x00, 0x0A, b'w', b'e', b'b', b'0', b'1', 0x00];
/// let parts = PacketDecoder::new(Registry::standard()).decode(&datagram).unwrap();
/// assert_eq!(parts.len(), 1);
/// assert_eq!(parts[0].to_string(), "HOSTNAME \"web01\"");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PacketDecoder<'r> {
    registry: &'r Registry,
}

impl Default for PacketDecoder<'static> {
    fn default() -> Self {
        Self::new(Registry::standard())
    }
}

impl<'r> PacketDecoder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Decode every part in `buf`, in wire order.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::ShortBuffer`] if a header, or the content it
    ///   declares, runs past the end of the buffer.
    /// - [`DecodeError::InvalidLength`] if a declared length is below 4 or
    ///   contradicts the content rules of its decoder.
    /// - [`DecodeError::UnknownValueKind`] if a value list carries an
    ///   unrecognised kind tag.
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<Part>, DecodeError> {
        let mut cursor = Cursor::new(buf);
        let mut parts = Vec::new();

        while !cursor.is_empty() {
            match self.decode_next(&mut cursor) {
                Ok(Some(part)) => parts.push(part),
                Ok(None) => {}
                Err(err) => {
                    debug!(error = %err, len = buf.len(), "datagram decode failed");
                    return Err(err);
                }
            }
        }

        trace!(parts = parts.len(), len = buf.len(), "datagram decoded");
        Ok(parts)
    }

    /// Decode or skip the part at the cursor. `None` means it was skipped.
    fn decode_next(&self, cursor: &mut Cursor<'_>) -> Result<Option<Part>, DecodeError> {
        let offset = cursor.offset();
        let header = PartHeader::read_from(cursor)?;
        let mut content = cursor.sub_cursor(header.content_len())?;

        let Some(decode) = self.registry.get(header.type_code) else {
            debug!(
                type_code = header.type_code,
                length = header.length,
                offset,
                "skipping unregistered part type"
            );
            return Ok(None);
        };

        let part = decode(header, &mut content)?;

        if !content.is_empty() {
            return Err(DecodeError::InvalidLength {
                offset,
                type_code: header.type_code,
                length: header.length,
                reason: "content decoder left bytes unread",
            });
        }

        trace!(
            type_code = header.type_code,
            length = header.length,
            offset,
            "decoded part"
        );
        Ok(Some(part))
    }
}
