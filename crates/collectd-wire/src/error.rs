/// Errors raised while reading raw bytes off a datagram.
///
/// Both variants carry the absolute byte offset (from the start of the
/// datagram) at which the failing read began.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Fewer bytes remain than a fixed-width field requires.
    #[error("short buffer at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    ShortBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A part header declared a total length smaller than the header itself.
    #[error("part {type_code:#06X} at offset {offset} declares length {length}, minimum is 4")]
    InvalidLength {
        offset: usize,
        type_code: u16,
        length: u16,
    },
}
