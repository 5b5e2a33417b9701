//! # Application Layer Network Protocols
//!
//! This module contains the application layer (OSI Layer 7) protocols of the
//! crate. Each protocol works with the core network traits and keeps a
//! consistent API for embedded systems.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: a requests-style HTTP client with redirects, basic
//!   authentication and a per-call cookie jar
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: Work with any type implementing [`Connection`](crate::network::Connection)
//! - **No-std Compatible**: Only `core` and `alloc` are required
//! - **Resource Conscious**: Exact-size allocations and bounded head buffers
//! - **Error Handling**: Transport errors surface unchanged; malformed input is tolerated
//!
//! ## Usage Pattern
//!
//! 1. Implement [`Connect`](crate::network::Connect) for your transport layer,
//!    with errors that convert into [`network::error::Error`](crate::network::error::Error)
//! 2. Wrap it in an [`Http1Transport`](http::Http1Transport) and a [`Client`](http::Client)
//! 3. Issue requests with per-call [`Options`](http::Options)
//!
//! ```rust,no_run
//! use librequests::network::application::http::{Client, Http1Transport, Options};
//! # use core::time::Duration;
//! # use librequests::network::error::Error;
//! # use librequests::network::{Close, Connect, Connection, Read, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = Error;
//! #     fn connect(&mut self, _remote: &str, _timeout: Option<Duration>) -> Result<MockConnection, Error> { Ok(MockConnection) }
//! # }
//!
//! let mut client = Client::new(Http1Transport::new(MockNetwork));
//! let _response = client.get("http://example.com/api/status", Options::new());
//! ```

/// HTTP client implementation.
///
/// Provides the redirect-following request orchestrator, the transport
/// traits it runs on, and an HTTP/1.1 transport over byte connections.
pub mod http;
