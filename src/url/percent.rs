//! Byte-wise percent-encoding and decoding.
//!
//! Encoding runs in two passes over the input: the first pass classifies each
//! byte and tallies the exact output length, the second fills a buffer
//! allocated once at that length. Input that needs no escaping is returned
//! borrowed, without any copy. Decoding likewise returns the input borrowed
//! when it contains nothing to decode.

use super::error::DecodeError;
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A set of ASCII bytes that are copied through the encoder unescaped.
///
/// ASCII letters and digits are always safe and are not stored in the set.
/// Only ASCII bytes can be marked safe: every byte of a multi-byte UTF-8
/// sequence is always escaped, which keeps the encoder output valid text.
///
/// # Examples
///
/// ```rust
/// use librequests::url::SafeSet;
///
/// let set = SafeSet::from_str("-._~:");
/// assert!(set.contains(b':'));
/// assert!(set.contains(b'a'));
/// assert!(!set.contains(b'/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeSet(u128);

impl SafeSet {
    /// The RFC 3986 unreserved punctuation: `-._~`.
    pub const UNRESERVED: SafeSet = SafeSet::from_bytes(b"-._~");

    /// Unreserved punctuation plus `/`, for encoding paths.
    pub const PATH: SafeSet = SafeSet::from_bytes(b"-._~/");

    /// No extra safe bytes; only letters and digits pass through.
    pub const NONE: SafeSet = SafeSet(0);

    /// Builds a set from explicit byte values. Non-ASCII bytes are ignored.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] < 0x80 {
                bits |= 1u128 << bytes[i];
            }
            i += 1;
        }
        SafeSet(bits)
    }

    /// Builds a set from the characters of a string. Non-ASCII characters are ignored.
    #[allow(clippy::should_implement_trait)]
    pub const fn from_str(chars: &str) -> Self {
        Self::from_bytes(chars.as_bytes())
    }

    /// Returns a copy of this set with `byte` added.
    pub const fn with(self, byte: u8) -> Self {
        if byte < 0x80 {
            SafeSet(self.0 | (1u128 << byte))
        } else {
            self
        }
    }

    /// Whether `byte` is copied unescaped: alphanumeric or a member of the set.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || (byte < 0x80 && self.0 & (1u128 << byte) != 0)
    }
}

impl Default for SafeSet {
    fn default() -> Self {
        SafeSet::PATH
    }
}

/// Percent-encodes `input`, leaving bytes in `safe` untouched.
///
/// Space becomes `%20`. Returns the input borrowed when nothing needs escaping.
///
/// ```rust
/// use librequests::url::{quote, SafeSet};
///
/// assert_eq!(quote("/a b/c", &SafeSet::PATH), "/a%20b/c");
/// assert_eq!(quote("/a/b", &SafeSet::UNRESERVED), "%2Fa%2Fb");
/// ```
pub fn quote<'a>(input: &'a str, safe: &SafeSet) -> Cow<'a, str> {
    encode(input, safe, false)
}

/// Percent-encodes `input` for a form query: like [`quote`] but space becomes `+`.
///
/// ```rust
/// use librequests::url::{quote_plus, SafeSet};
///
/// assert_eq!(quote_plus("a b+c", &SafeSet::UNRESERVED), "a+b%2Bc");
/// ```
pub fn quote_plus<'a>(input: &'a str, safe: &SafeSet) -> Cow<'a, str> {
    encode(input, safe, true)
}

/// Decodes `%XY` escapes in `input`.
///
/// A `%` not followed by two hex digits is kept literally and scanning resumes
/// at the next byte. Fails only if the decoded bytes are not valid UTF-8.
///
/// ```rust
/// use librequests::url::unquote;
///
/// assert_eq!(unquote("a%20b").unwrap(), "a b");
/// assert_eq!(unquote("100%").unwrap(), "100%");
/// assert_eq!(unquote("a+b").unwrap(), "a+b");
/// ```
pub fn unquote(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode(input, false)
}

/// Decodes a form-encoded string: `+` becomes space, then `%XY` escapes are decoded.
pub fn unquote_plus(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode(input, true)
}

fn encode<'a>(input: &'a str, safe: &SafeSet, plus: bool) -> Cow<'a, str> {
    let bytes = input.as_bytes();

    // Pass 1: count escapes to size the output exactly.
    let mut escapes = 0;
    let mut rewrites = false;
    for &b in bytes {
        if safe.contains(b) {
            continue;
        }
        if plus && b == b' ' {
            rewrites = true;
        } else {
            escapes += 1;
        }
    }

    if escapes == 0 && !rewrites {
        return Cow::Borrowed(input);
    }

    // Pass 2: fill a buffer of exactly the tallied length.
    let len = bytes.len() + 2 * escapes;
    let mut out = String::with_capacity(len);
    for &b in bytes {
        if safe.contains(b) {
            out.push(b as char);
        } else if plus && b == b' ' {
            out.push('+');
        } else {
            out.push('%');
            out.push(HEX_DIGITS[(b >> 4) as usize] as char);
            out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
        }
    }
    debug_assert_eq!(out.len(), len);

    Cow::Owned(out)
}

fn decode(input: &str, plus: bool) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = input.as_bytes();
    if !bytes.iter().any(|&b| b == b'%' || (plus && b == b'+')) {
        return Ok(Cow::Borrowed(input));
    }

    // Decoding never grows the input, so one allocation suffices.
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b'+' if plus => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out)
        .map(Cow::Owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    match byte? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
