use crate::cursor::Cursor;
use crate::error::WireError;

/// Size of the fixed part header in bytes.
pub const HEADER_SIZE: usize = 4;

/// The 4-byte header that prefixes every part.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────────┐
/// │ Offset │ Size    │ Description                              │
/// ├────────┼─────────┼──────────────────────────────────────────┤
/// │ 0x00   │ 2 bytes │ Type code (u16 BE)                       │
/// │ 0x02   │ 2 bytes │ Length of the whole part incl. header    │
/// │ 0x04   │ len - 4 │ Content, format selected by type code    │
/// └────────┴─────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartHeader {
    pub type_code: u16,
    /// Total part length, always `>= HEADER_SIZE`.
    pub length: u16,
}

impl PartHeader {
    /// Number of content bytes following the header.
    pub fn content_len(self) -> usize {
        usize::from(self.length).saturating_sub(HEADER_SIZE)
    }

    /// Read a header from the cursor: type code first, then length.
    ///
    /// # Errors
    ///
    /// - [`WireError::ShortBuffer`] if fewer than 4 bytes remain.
    /// - [`WireError::InvalidLength`] if the declared length is below 4.
    ///   This is checked before any content byte is touched.
    pub fn read_from(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        let offset = cursor.offset();
        let type_code = cursor.read_u16_be()?;
        let length = cursor.read_u16_be()?;

        if usize::from(length) < HEADER_SIZE {
            return Err(WireError::InvalidLength {
                offset,
                type_code,
                length,
            });
        }

        Ok(Self { type_code, length })
    }
}
