//! URL toolkit for constrained devices.
//!
//! This module provides the URL handling the HTTP client depends on:
//! splitting URLs and authorities, recomposing them, resolving relative
//! references, removing dot-segments, and percent-encoding strings and query
//! strings. It is designed for `no_std` targets with a small heap.
//!
//! # Design
//!
//! - **Borrow first**: split components borrow from the input, and the codecs
//!   return [`Cow::Borrowed`](alloc::borrow::Cow) when there is nothing to do.
//! - **Exact allocation**: when the encoder must copy, it counts the output
//!   length first and allocates once.
//! - **Tolerant parsing**: malformed ports, unclosed IPv6 brackets and
//!   incomplete escapes produce absent or literal values instead of errors.
//!   Only a decoded byte sequence that is not UTF-8 is rejected.
//!
//! # Examples
//!
//! ```rust
//! use librequests::url::{join_url, split_authority, split_url};
//!
//! let url = join_url("http://example.com/api/v1/", "../v2/items?id=7");
//! assert_eq!(url, "http://example.com/api/v2/items?id=7");
//!
//! let parts = split_url(&url, "", true);
//! let authority = split_authority(parts.authority);
//! assert_eq!(authority.host.as_deref(), Some("example.com"));
//! assert_eq!(authority.port, None);
//! ```

#![deny(unsafe_code)]

/// Composing URLs, reference resolution and dot-segment removal.
pub mod compose;

/// Error types for the URL toolkit.
pub mod error;

/// Percent-encoding and decoding of individual strings.
pub mod percent;

/// Query string encoding and decoding.
pub mod query;

/// Splitting URLs and authorities.
pub mod split;

pub use compose::{join_url, normalize_path, unsplit, unsplit_url};
pub use error::DecodeError;
pub use percent::{SafeSet, quote, quote_plus, unquote, unquote_plus};
pub use query::{decode_query, decode_query_multi, decode_query_pairs, encode_query, encode_query_seq};
pub use split::{Authority, SplitUrl, split_authority, split_url};

#[cfg(test)]
mod tests;
