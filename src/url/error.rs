//! Error types for the URL toolkit

/// An error raised while percent-decoding.
///
/// Malformed escapes (a `%` not followed by two hex digits) are tolerated and
/// copied through literally, so the only input the decoder rejects is one whose
/// decoded bytes are not valid UTF-8.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecodeError {
    /// The decoded byte sequence is not valid UTF-8.
    InvalidUtf8,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::InvalidUtf8 => f.write_str("percent-decoded bytes are not valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecodeError::InvalidUtf8 => defmt::write!(f, "InvalidUtf8"),
        }
    }
}
