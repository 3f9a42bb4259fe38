//! # sipuri
//!
//! Zero-copy decomposition of SIP and SIPS URIs.
//!
//! A uri is split in four views into the caller buffer, `scheme`,
//! `host`, `parameters` and `headers`, and can be written back to
//! the exact same bytes.
//!
//! ```
//! use sipuri::SipUri;
//!
//! let input = "sip:alice;day=tuesday@atlanta.com";
//! let uri = SipUri::parse(input).unwrap();
//!
//! assert_eq!(uri.host, "alice");
//! assert_eq!(uri.parameters, "day=tuesday@atlanta.com");
//! assert_eq!(uri.to_string(), input);
//! ```

pub mod uri;
pub mod view;

pub(crate) mod error;
pub(crate) mod scanner;

pub use error::{Error, Result};
pub use uri::{decompose, SipUri};
pub use view::Span;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
