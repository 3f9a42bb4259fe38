use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No `:` was found inside the given range.
    #[error("Malformed SIP URI: missing scheme separator")]
    MalformedUri,

    /// The uri has an empty scheme or an empty host and
    /// cannot be written out.
    #[error("Invalid SIP URI: scheme and host are required")]
    InvalidUri,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
