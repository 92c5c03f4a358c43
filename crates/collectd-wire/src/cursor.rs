use crate::error::WireError;

/// Forward-only reader over a borrowed byte slice.
///
/// Every read is bounds-checked and either consumes exactly the bytes it
/// asked for or fails with [`WireError::ShortBuffer`] without moving. The
/// cursor never copies: [`take`](Self::take) hands back a sub-slice of the
/// original buffer.
///
/// A cursor created with [`sub_cursor`](Self::sub_cursor) reports offsets
/// relative to the start of the whole datagram, so errors raised deep
/// inside a value list still point at the right byte.
///
/// ```text
///   buf:  [ consumed ........ | remaining ............ ]
///          ^base               ^pos
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the first byte of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            base: 0,
        }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Absolute offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Consume exactly `n` bytes and return them as a borrowed slice.
    ///
    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than `n` bytes remain. The
    /// cursor does not move in that case.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.remaining() {
            return Err(WireError::ShortBuffer {
                offset: self.offset(),
                needed: n,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Consume exactly `N` bytes into a fixed-size array.
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if the buffer is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take_array::<1>()?[0])
    }

    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        self.take_array().map(u16::from_be_bytes)
    }

    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than 4 bytes remain.
    pub fn read_u32_be(&mut self) -> Result<u32, WireError> {
        self.take_array().map(u32::from_be_bytes)
    }

    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than 4 bytes remain.
    pub fn read_i32_be(&mut self) -> Result<i32, WireError> {
        self.take_array().map(i32::from_be_bytes)
    }

    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than 8 bytes remain.
    pub fn read_i64_be(&mut self) -> Result<i64, WireError> {
        self.take_array().map(i64::from_be_bytes)
    }

    /// Read an IEEE-754 double stored **little-endian**.
    ///
    /// collectd writes gauge values in host order on x86, which is the one
    /// place the network format is not big-endian.
    ///
    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than 8 bytes remain.
    pub fn read_f64_le(&mut self) -> Result<f64, WireError> {
        self.take_array().map(f64::from_le_bytes)
    }

    /// Split off the next `n` bytes as an independent cursor.
    ///
    /// The parent advances past the bytes; the child can only read within
    /// them, so a content decoder handed the child can never run into the
    /// following part.
    ///
    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than `n` bytes remain.
    pub fn sub_cursor(&mut self, n: usize) -> Result<Cursor<'a>, WireError> {
        let base = self.offset();
        let buf = self.take(n)?;
        Ok(Cursor { buf, pos: 0, base })
    }
}
