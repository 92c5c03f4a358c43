use collectd_types::TypeError;
use collectd_wire::WireError;

/// Errors that abort decoding of a datagram.
///
/// Every variant is terminal: once the byte stream is misaligned nothing
/// after the failure point can be trusted, so the decoder returns the
/// first error and no parts. Unknown type codes are not errors and never
/// show up here.
///
/// ```text
///   DecodeError
///   ├── ShortBuffer       ← a fixed-width read ran past the end
///   ├── InvalidLength     ← declared length contradicts the content rules
///   └── UnknownValueKind  ← value-list kind byte outside 0..=3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a header field or numeric payload needs.
    #[error("short buffer at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    ShortBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A part's declared length is inconsistent with its content: below
    /// the header size, zero-length text, a numeric part that is not
    /// exactly 8 bytes, or a value list that over- or under-runs.
    #[error("invalid length {length} for part {type_code:#06X} at offset {offset}: {reason}")]
    InvalidLength {
        offset: usize,
        type_code: u16,
        length: u16,
        reason: &'static str,
    },

    /// A value-list entry's kind tag is not Counter, Gauge, Derive or Absolute.
    #[error("unknown value kind {kind:#04X} at offset {offset}")]
    UnknownValueKind { offset: usize, kind: u8 },
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::ShortBuffer {
                offset,
                needed,
                remaining,
            } => Self::ShortBuffer {
                offset,
                needed,
                remaining,
            },
            WireError::InvalidLength {
                offset,
                type_code,
                length,
            } => Self::InvalidLength {
                offset,
                type_code,
                length,
                reason: "declared length is smaller than the 4-byte header",
            },
        }
    }
}

impl DecodeError {
    /// Lift a [`TypeError`] raised at `offset` into a decode error.
    pub(crate) fn from_type_error(err: TypeError, offset: usize) -> Self {
        match err {
            TypeError::UnknownValueKind { value } => Self::UnknownValueKind {
                offset,
                kind: value,
            },
        }
    }
}
