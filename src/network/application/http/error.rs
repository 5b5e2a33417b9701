//! Errors surfaced by the HTTP client.

use crate::url::DecodeError;

/// An error returned by [`Client::request`](super::Client::request) or by a
/// [`Response`](super::Response) accessor.
///
/// `E` is the transport's error type; transport failures are passed through
/// unchanged and never retried.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<E> {
    /// The transport failed to connect, send, or read.
    Transport(E),
    /// The URL scheme is neither `http` nor `https`.
    UnsupportedScheme,
    /// The URL names no host to connect to.
    MissingHost,
    /// Credentials in the URL did not percent-decode to UTF-8.
    Decode(DecodeError),
    /// The JSON body could not be serialized within
    /// [`MAX_JSON_BODY_LEN`](super::MAX_JSON_BODY_LEN) bytes.
    Serialize,
    /// The response body is not the JSON that was asked for.
    Deserialize,
    /// The response body is not UTF-8 text.
    InvalidText,
}

impl<E> From<DecodeError> for Error<E> {
    fn from(error: DecodeError) -> Self {
        Error::Decode(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {e:?}"),
            Error::UnsupportedScheme => f.write_str("unsupported URL scheme"),
            Error::MissingHost => f.write_str("URL has no host"),
            Error::Decode(e) => write!(f, "{e}"),
            Error::Serialize => f.write_str("failed to serialize JSON body"),
            Error::Deserialize => f.write_str("failed to deserialize JSON response"),
            Error::InvalidText => f.write_str("response body is not UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(e) => defmt::write!(f, "Transport({})", e),
            Error::UnsupportedScheme => defmt::write!(f, "UnsupportedScheme"),
            Error::MissingHost => defmt::write!(f, "MissingHost"),
            Error::Decode(e) => defmt::write!(f, "Decode({})", e),
            Error::Serialize => defmt::write!(f, "Serialize"),
            Error::Deserialize => defmt::write!(f, "Deserialize"),
            Error::InvalidText => defmt::write!(f, "InvalidText"),
        }
    }
}
