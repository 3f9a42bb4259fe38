//! Borrowed views into a caller owned buffer.

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Range,
    str::{self, Utf8Error},
};

/// A read-only view of `buf[start..end]`.
///
/// A `Span` never copies the bytes it refers to, it only
/// keeps the buffer reference and the offsets, so it can
/// not outlive the buffer it was taken from.
///
/// # Examples
///
/// ```
/// use sipuri::Span;
///
/// let buf = b"sip:alice@atlanta.com";
/// let scheme = Span::new(buf, 0, 3);
///
/// assert_eq!(scheme, "sip");
/// assert_eq!(scheme.range(), 0..3);
/// assert!(scheme.is_valid());
/// ```
///
/// Two spans are equal when they cover the same bytes, no matter
/// which buffer or offsets they come from.
#[derive(Clone, Copy)]
pub struct Span<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    /// Creates a view of `buf[start..end]`.
    ///
    /// An `end` past the buffer is clamped to its length and a
    /// `start` past `end` gives an empty view at `end`.
    #[inline]
    pub fn new(buf: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(buf.len());
        let start = start.min(end);

        Self { buf, start, end }
    }

    /// The empty view, used as the reset state of every
    /// uri component.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            buf: &[],
            start: 0,
            end: 0,
        }
    }

    /// Returns the number of bytes in the view.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the view points to at least one
    /// readable byte.
    ///
    /// This is the presence check used when writing a uri
    /// out, an empty view is never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end && self.end <= self.buf.len()
    }

    /// Returns the bytes of the view.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.start..self.end]
    }

    /// Returns the view as a string slice.
    pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Returns the offsets of the view inside the original
    /// buffer.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl Default for Span<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Span<'_> {}

impl Hash for Span<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for Span<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Span<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Span<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for Span<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", String::from_utf8_lossy(self.as_bytes()), self.range())
    }
}
