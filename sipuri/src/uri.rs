//! SIP URI decomposition.
//!
//! The module provides [`SipUri`], the four component view of a
//! `sip:`/`sips:` uri, and [`decompose`] to build it from a byte
//! range.
//!
//! ```text
//! sip:user:password@host:port;uri-parameters?headers
//! \_/ \_____________________/ \____________/ \_____/
//!  |             |                  |           |
//! scheme        host            parameters   headers
//! ```

use std::{fmt, io, slice};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    scanner::Scanner,
    view::Span,
};

/// Separates the scheme from the rest of the uri.
const SCHEME_SEP: u8 = b':';
/// Starts the uri parameters.
const PARAMS_SEP: u8 = b';';
/// Starts the uri headers.
const HEADERS_SEP: u8 = b'?';

/// A decomposed SIP URI.
///
/// Every component borrows from the buffer the uri was decomposed
/// from. The `host` component is kept as a whole and may contain
/// the user info and the port (`alice:secret@atlanta.com:5060`).
///
/// # Examples
///
/// ```
/// use sipuri::SipUri;
///
/// let uri = SipUri::parse(b"sip:alice@atlanta.com;transport=tcp").unwrap();
///
/// assert_eq!(uri.scheme, "sip");
/// assert_eq!(uri.host, "alice@atlanta.com");
/// assert_eq!(uri.parameters, "transport=tcp");
/// assert!(uri.headers.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SipUri<'a> {
    /// The uri scheme, e.g. `sip` or `sips`.
    pub scheme: Span<'a>,

    /// Everything between the scheme and the first `;` or `?`.
    pub host: Span<'a>,

    /// The text after `;` up to the first `?`.
    pub parameters: Span<'a>,

    /// The text after `?`.
    pub headers: Span<'a>,
}

/// Decomposes the uri held in `buf[start..end]`.
///
/// The range must contain a single uri without angle brackets or
/// display name. Bytes at or after `end` are never read, an `end`
/// past the buffer is clamped to its length.
///
/// # Errors
///
/// Returns [`Error::MalformedUri`] if the range has no `:`.
///
/// # Examples
///
/// ```
/// use sipuri::decompose;
///
/// let line = b"To: <sip:bob@biloxi.com>\r\n";
/// let uri = decompose(line, 5, 23).unwrap();
///
/// assert_eq!(uri.host, "bob@biloxi.com");
/// assert_eq!(uri.host.range(), 9..23);
/// ```
pub fn decompose(buf: &[u8], start: usize, end: usize) -> Result<SipUri<'_>> {
    let mut scanner = Scanner::new(buf, start, end);

    let Some(colon) = scanner.find(SCHEME_SEP) else {
        debug!("no scheme separator in {}..{}", scanner.pos(), scanner.end());
        return Err(Error::MalformedUri);
    };

    let mut uri = SipUri {
        scheme: scanner.read_to(colon),
        ..Default::default()
    };
    scanner.bump();

    match scanner.find2(PARAMS_SEP, HEADERS_SEP) {
        None => {
            uri.host = scanner.read_rest();
        }
        Some(delim) => {
            uri.host = scanner.read_to(delim);
            if scanner.peek() == Some(PARAMS_SEP) {
                scanner.bump();
                uri.parameters = scanner.read_until(HEADERS_SEP);
            }
            if scanner.peek() == Some(HEADERS_SEP) {
                scanner.bump();
                uri.headers = scanner.read_rest();
            }
        }
    }

    trace!(
        "decomposed uri {}..{} scheme={} host={} parameters={} headers={}",
        uri.scheme.range().start,
        scanner.end(),
        uri.scheme.len(),
        uri.host.len(),
        uri.parameters.len(),
        uri.headers.len()
    );

    Ok(uri)
}

impl<'a> SipUri<'a> {
    /// Decomposes a whole byte slice.
    ///
    /// This is equivalent to `decompose(buf, 0, buf.len())`.
    #[inline]
    pub fn parse<B>(buf: &'a B) -> Result<Self>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        let buf = buf.as_ref();

        decompose(buf, 0, buf.len())
    }

    /// Returns `true` if both `scheme` and `host` are present,
    /// only such uris can be written out.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.scheme.is_valid() && self.host.is_valid()
    }

    /// Returns the length of the full canonical form
    /// `scheme:host[;parameters][?headers]`.
    ///
    /// This is the buffer size [`SipUri::serialize_into`] needs to
    /// write the uri without truncation.
    pub fn encoded_len(&self) -> usize {
        let mut len = self.scheme.len() + 1 + self.host.len();
        if self.parameters.is_valid() {
            len += 1 + self.parameters.len();
        }
        if self.headers.is_valid() {
            len += 1 + self.headers.len();
        }
        len
    }

    /// Writes the canonical form of the uri into `out`.
    ///
    /// Output stops silently once `out` is full and the number of
    /// bytes actually written is returned, so a return value equal
    /// to `out.len()` may mean the uri was cut. Use
    /// [`SipUri::encoded_len`] to size the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`] without writing anything if the
    /// scheme or the host is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sipuri::SipUri;
    ///
    /// let uri = SipUri::parse("sip:p2.domain.com;lr").unwrap();
    /// let mut buf = [0u8; 64];
    /// let n = uri.serialize_into(&mut buf).unwrap();
    ///
    /// assert_eq!(&buf[..n], b"sip:p2.domain.com;lr");
    /// ```
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize> {
        self.check()?;

        let mut pos = 0;
        for part in self.parts() {
            pos += copy_bounded(part, &mut out[pos..]);
        }

        if pos < self.encoded_len() {
            debug!("uri truncated to {} of {} bytes", pos, self.encoded_len());
        }

        Ok(pos)
    }

    /// Writes the canonical form of the uri to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`] if the scheme or the host is
    /// empty, and [`Error::Io`] if the writer fails.
    pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
    where
        W: io::Write,
    {
        self.check()?;

        for part in self.parts() {
            writer.write_all(part)?;
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            debug!(
                "refusing to write uri without scheme or host (scheme={} host={})",
                self.scheme.len(),
                self.host.len()
            );
            Err(Error::InvalidUri)
        }
    }

    /// The byte chunks of the canonical form, in order.
    fn parts(&self) -> impl Iterator<Item = &'a [u8]> {
        let params = self
            .parameters
            .is_valid()
            .then(|| [slice::from_ref(&PARAMS_SEP), self.parameters.as_bytes()]);
        let headers = self
            .headers
            .is_valid()
            .then(|| [slice::from_ref(&HEADERS_SEP), self.headers.as_bytes()]);

        [
            self.scheme.as_bytes(),
            slice::from_ref(&SCHEME_SEP),
            self.host.as_bytes(),
        ]
        .into_iter()
        .chain(params.into_iter().flatten())
        .chain(headers.into_iter().flatten())
    }
}

/// Copies as much of `src` as fits in `dst`.
#[inline]
fn copy_bounded(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

impl<'a> TryFrom<&'a [u8]> for SipUri<'a> {
    type Error = Error;

    fn try_from(value: &'a [u8]) -> Result<Self> {
        Self::parse(value)
    }
}

impl<'a> TryFrom<&'a str> for SipUri<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for SipUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }
        write!(f, "{}:{}", self.scheme, self.host)?;

        if self.parameters.is_valid() {
            write!(f, ";{}", self.parameters)?;
        }
        if self.headers.is_valid() {
            write!(f, "?{}", self.headers)?;
        }

        Ok(())
    }
}
