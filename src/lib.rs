//! # librequests - HTTP requests for small devices
//!
//! A requests-style HTTP client and URL toolkit for embedded systems. The
//! library runs on `core` and `alloc`, and supports `no_std` environments.
//!
//! ## Features
//!
//! ### URL toolkit
//! - **Splitting**: URLs into scheme, authority, path, query and fragment, and
//!   authorities into user, password, host and port
//! - **Composing**: recombining components, RFC 3986 reference resolution and
//!   dot-segment removal
//! - **Percent codec**: plain and `+`-for-space variants that borrow when
//!   nothing needs escaping
//! - **Query codec**: encoding pairs and multi-value maps, decoding into a
//!   list, a first-value map or a multi-value map
//!
//! ### HTTP client
//! - Redirect following with a per-call budget
//! - Basic authentication from the URL or from per-call credentials
//! - A per-call cookie jar that never leaks across origins
//! - JSON request and response bodies through `serde`
//! - An HTTP/1.1 transport over any byte connection
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! librequests = "0.1.0"
//! ```
//!
//! ### URL Example
//!
//! ```rust
//! use librequests::url::{decode_query, join_url};
//!
//! let url = join_url("http://a/b/c/d;p?q", "../g?x=1&y=2");
//! assert_eq!(url, "http://a/b/g?x=1&y=2");
//!
//! let query = decode_query("x=1&y=2&z", false).unwrap();
//! assert_eq!(query.get("y").map(String::as_str), Some("2"));
//! assert!(!query.contains_key("z"));
//! ```
//!
//! ### HTTP Client Example
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
//! let options = Options::new()
//!     .auth("device-42", "secret")
//!     .timeout(Duration::from_secs(10));
//!
//! // let mut response = client.get("http://example.com/api/data", options)?;
//! // let body = response.text()?;
//! # let _ = (&mut client, options);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers with a heap (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` and `alloc` libraries
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the blocking
//!   [`TcpConnector`](network::tcp::TcpConnector) (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Network abstraction layer and the HTTP client built on it.
///
/// This module contains the byte-connection traits the client runs on and
/// the application layer HTTP implementation.
pub mod network;

/// URL toolkit: splitting, composing, joining and percent-encoding.
pub mod url;
