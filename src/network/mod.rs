//! A network abstraction layer for embedded systems
//!
//! This module provides the byte-level traits the HTTP client runs on:
//! anything that can read, write and close can carry HTTP/1.1 through
//! [`application::http::Http1Transport`], and anything that can open such a
//! connection from an address is a [`Connect`]or.
//!

#![deny(unsafe_code)]

use core::time::Duration;

/// Common error types for network operations
pub mod error;

/// Application layer protocols
pub mod application;

/// Blocking TCP connector on top of `std::net`
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

/// A source of bytes.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means no more data.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// A sink of bytes.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Something that can be shut down, releasing its resources.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `remote`, given as `scheme://host:port`.
    ///
    /// `timeout` bounds connecting and every later read/write, when the
    /// connector supports it.
    fn connect(&mut self, remote: &str, timeout: Option<Duration>) -> Result<Self::Connection, Self::Error>;
}
