//! Sentinel-terminated, growable source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the cursor to read the current byte without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment.
//!
//! # Growth
//!
//! Content is only ever appended, via [`SourceBuffer::append`] or
//! [`SourceBuffer::load_file`]. Appending rewrites the sentinel and padding
//! after the new content, so the sentinel invariant holds after every
//! mutation. Existing byte offsets stay valid across appends because the
//! prefix is never rewritten. While a [`Cursor`] or [`Lexer`](crate::Lexer)
//! borrows the buffer it cannot be appended to at all.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::token::{Location, Span};
use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated, append-only source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Failure while loading a file into a [`SourceBuffer`].
///
/// Each variant names the step that failed. The buffer is left exactly as
/// it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("could not read file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file size could not be determined.
    #[error("could not read file {}: cannot determine file size: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading the file contents failed part way.
    #[error("could not read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Appending the file would push the buffer past `u32::MAX` bytes.
    #[error("could not read file {}: buffer would grow to {total} bytes (limit is 4 GiB)", path.display())]
    TooLarge { path: PathBuf, total: u64 },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Metadata { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::TooLarge { path, .. } => path,
        }
    }
}

impl SourceBuffer {
    /// Create a buffer holding a copy of `source`.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer holding a copy of `bytes`.
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are truncated to
    /// `u32::MAX` bytes and a warning is logged. Use
    /// [`try_from_bytes`](Self::try_from_bytes) or
    /// [`load_file`](Self::load_file) to get a reported failure instead.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if let Some(buffer) = Self::try_from_bytes(bytes) {
            return buffer;
        }
        let kept = u32::MAX as usize;
        tracing::warn!(len = bytes.len(), kept, "source truncated to u32::MAX bytes");
        let mut buffer = Self::empty();
        buffer.extend(&bytes[..kept]);
        buffer
    }

    /// Create a buffer holding a copy of `bytes`, or `None` when `bytes`
    /// does not fit in `u32` offsets.
    pub fn try_from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut buffer = Self::empty();
        buffer.append(bytes)?;
        Some(buffer)
    }

    /// Zero-length buffer holding only the sentinel.
    fn empty() -> Self {
        let mut buffer = Self {
            buf: Vec::new(),
            source_len: 0,
        };
        buffer.extend(&[]);
        buffer
    }

    /// Append `bytes` after the current content.
    ///
    /// Returns the span the new bytes occupy, or `None` (leaving the buffer
    /// untouched) if the combined length would exceed `u32::MAX`.
    pub fn append(&mut self, bytes: &[u8]) -> Option<Span> {
        let added = u32::try_from(bytes.len()).ok()?;
        let end = self.source_len.checked_add(added)?;
        let start = self.source_len;
        self.extend(bytes);
        debug_assert_eq!(self.source_len, end);
        Some(Span::new(start, end))
    }

    /// Read the whole file at `path` and append it to the buffer.
    ///
    /// Returns the span of the appended content. On any failure the buffer
    /// is unmodified.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Span, LoadError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let size = file
            .metadata()
            .map_err(|source| LoadError::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let total = u64::from(self.source_len).saturating_add(size);
        if total > u64::from(u32::MAX) {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                total,
            });
        }

        // Read into scratch space first so a failed read commits nothing.
        let mut contents = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        file.read_to_end(&mut contents)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        // The file may have grown between the size query and the read.
        let Some(span) = self.append(&contents) else {
            let read = u64::try_from(contents.len()).unwrap_or(u64::MAX);
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                total: u64::from(self.source_len).saturating_add(read),
            });
        };

        tracing::debug!(
            path = %path.display(),
            start = span.start,
            bytes = span.len(),
            "loaded source file"
        );
        Ok(span)
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0, row 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Number of lines in the content (newline count plus one).
    pub fn line_count(&self) -> u32 {
        let newlines = memchr::memchr_iter(b'\n', self.as_bytes()).count();
        // At most `source_len` newlines, so this cannot truncate.
        u32::try_from(newlines).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// Compute the location of `offset` independently of any cursor.
    ///
    /// `offset` may equal [`len()`](Self::len) (the End position). Returns
    /// `None` for offsets past the end.
    pub fn location_of<'f>(&self, file: &'f str, offset: u32) -> Option<Location<'f>> {
        let before = self.as_bytes().get(..offset as usize)?;
        let newlines = memchr::memchr_iter(b'\n', before).count();
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |pos| pos + 1);
        let row = u32::try_from(newlines).ok()?;
        let line_start = u32::try_from(line_start).ok()?;
        Some(Location::new(file, row + 1, offset - line_start + 1))
    }

    /// Append `bytes` and re-establish the sentinel and padding.
    ///
    /// Callers have already checked that the new length fits in `u32`.
    fn extend(&mut self, bytes: &[u8]) {
        let old_len = self.source_len as usize;
        let new_len = old_len + bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (new_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        self.buf.truncate(old_len);
        self.buf.extend_from_slice(bytes);
        self.buf.resize(padded_len, 0);
        self.source_len = u32::try_from(new_len).unwrap_or(u32::MAX);
    }
}

impl Default for SourceBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Size assertion: `SourceBuffer` should stay small on 64-bit platforms.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
