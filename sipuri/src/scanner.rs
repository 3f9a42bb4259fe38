use log::trace;

use crate::view::Span;

/// Reads a byte slice inside a fixed `[start, end)` window.
///
/// Every lookup is done on `src[idx..end]`, bytes at or
/// after `end` are never inspected.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    /// The input bytes slice to be read.
    src: &'a [u8],
    /// Current index.
    idx: usize,
    /// Exclusive upper bound.
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Create a `Scanner` over `src[start..end]`.
    ///
    /// An `end` past the slice is clamped to its length and a
    /// `start` past `end` gives an exhausted scanner.
    pub fn new(src: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(src.len());

        Scanner {
            src,
            idx: start.min(end),
            end,
        }
    }

    /// Current index in the source slice.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.idx
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns `true` if all bytes where read
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.idx >= self.end
    }

    /// Get next byte without advance
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    /// Moves past the current byte.
    #[inline]
    pub fn bump(&mut self) {
        if !self.is_eof() {
            self.idx += 1;
        }
    }

    /// The unread part of the window.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.src[self.idx..self.end]
    }

    /// Finds the next `byte` without advance.
    ///
    /// Returns the absolute index of the byte in the source
    /// slice.
    pub fn find(&self, byte: u8) -> Option<usize> {
        let found = memchr::memchr(byte, self.remaining()).map(|n| self.idx + n);
        trace!("find {:?} in {}..{} -> {:?}", byte as char, self.idx, self.end, found);

        found
    }

    /// Same as [Scanner::find] but stops at the first of
    /// two bytes.
    pub fn find2(&self, b1: u8, b2: u8) -> Option<usize> {
        let found = memchr::memchr2(b1, b2, self.remaining()).map(|n| self.idx + n);
        trace!(
            "find {:?}|{:?} in {}..{} -> {:?}",
            b1 as char,
            b2 as char,
            self.idx,
            self.end,
            found
        );

        found
    }

    /// Reads up to `idx`, leaving the scanner on it.
    ///
    /// `idx` must lie inside the unread window.
    pub fn read_to(&mut self, idx: usize) -> Span<'a> {
        debug_assert!(self.idx <= idx && idx <= self.end);
        let start = self.idx;
        self.idx = idx;

        Span::new(self.src, start, idx)
    }

    /// Reads everything left in the window.
    pub fn read_rest(&mut self) -> Span<'a> {
        self.read_to(self.end)
    }

    /// Reads until the next `byte` or the end of the
    /// window, whichever comes first.
    pub fn read_until(&mut self, byte: u8) -> Span<'a> {
        let stop = self.find(byte).unwrap_or(self.end);

        self.read_to(stop)
    }
}
