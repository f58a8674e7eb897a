//! Line-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte, keeping the row
//! counter and the offset of the current line's first byte in step, so a
//! [`Location`](crate::Location) can be derived at any point without
//! rescanning.
//!
//! # End of buffer
//!
//! The byte after the content is always the `0x00` sentinel. Reading
//! [`current()`](Cursor::current) at the end therefore never goes out of
//! bounds, and whitespace skipping terminates there on its own because
//! `0x00` is not whitespace. Consuming, however, is bounded explicitly by
//! the content length: interior null bytes are consumable, the sentinel is
//! not.

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale:
/// space, `\t`, `\n`, vertical tab, form feed, and `\r`.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Length-checked prefix comparison: running out of input is a mismatch.
#[inline]
pub(crate) fn starts_with_bounded(bytes: &[u8], literal: &[u8]) -> bool {
    if literal.len() > bytes.len() {
        return false;
    }
    bytes[..literal.len()] == *literal
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariants
///
/// - `buf[source_len] == 0x00`, guaranteed by `SourceBuffer`.
/// - `line_start <= pos <= source_len`.
/// - `pos` never decreases.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Number of newlines consumed so far (0-based row).
    row: u32,
    /// Offset of the first byte of the line containing `pos`.
    line_start: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), 4 x u32 = 16 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            row: 0,
            line_start: 0,
        }
    }

    /// Returns the byte at the current position, `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns `true` if every content byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Consume one byte.
    ///
    /// Returns `true` if a byte was consumed and `false` (without moving)
    /// at the end of the buffer. Consuming `\n` bumps the row and moves the
    /// line start to the byte after it; that bookkeeping never affects the
    /// return value.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.is_eof() {
            return false;
        }
        let byte = self.current();
        self.pos += 1;
        if byte == b'\n' {
            self.row += 1;
            self.line_start = self.pos;
        }
        true
    }

    /// Consume up to `n` bytes, stopping early only at the end of the buffer.
    ///
    /// Returns the number of bytes actually consumed.
    pub fn advance_n(&mut self, n: u32) -> u32 {
        let mut consumed = 0;
        while consumed < n && self.advance() {
            consumed += 1;
        }
        consumed
    }

    /// Advance past whitespace (see [`is_whitespace`]), tracking newlines.
    ///
    /// The sentinel is not whitespace, so the loop stops at the end of the
    /// buffer without a separate length check.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while is_whitespace(self.current()) && self.advance() {}
    }

    /// Unconsumed source content (never includes the sentinel).
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Zero-based row of the current position.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Offset of the first byte of the current line.
    #[inline]
    pub fn line_start(&self) -> u32 {
        self.line_start
    }

    /// One-based column of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos - self.line_start + 1
    }
}
