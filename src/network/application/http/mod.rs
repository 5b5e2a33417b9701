//! A requests-style HTTP client for embedded systems.
//!
//! [`Client`] runs the request loop of one call: it prepares private copies of
//! the caller's headers and cookies, resolves credentials, sends the request
//! through a [`Transport`], merges `Set-Cookie` values into the call's
//! [`CookieJar`], and follows redirects until the [`Redirects`] budget is
//! spent. Redirects that change scheme, host or port drop the jar, the
//! credentials given through [`Options::auth`] and any `Authorization`
//! header.
//!
//! The transport is a collaborator: [`Http1Transport`] speaks HTTP/1.1 over
//! any [`Connect`](crate::network::Connect)or, and tests can plug in a
//! scripted transport instead.
//!
//! # Usage
//!
//! ```rust,no_run
//! use librequests::network::application::http::{Client, CookieJar, Http1Transport, Options};
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
//! let cookies: CookieJar = [("session", "abc")].into_iter().collect();
//!
//! let options = Options::new()
//!     .data(b"temperature=23.5")
//!     .cookies(&cookies)
//!     .redirects(3u8);
//! if let Ok(mut response) = client.post("http://example.com/readings", options) {
//!     let _status = response.status_code();
//!     let _text = response.text();
//! }
//! ```

/// The request orchestrator: [`Client`], [`Options`] and [`Method`].
pub mod client;

/// The per-call cookie jar.
pub mod cookies;

/// Errors surfaced to callers.
pub mod error;

/// Case-insensitive header map.
pub mod headers;

/// HTTP/1.1 transport over byte connections.
pub mod http1;

/// Responses and their lazily read bodies.
pub mod response;

/// The transport collaborator traits.
pub mod transport;

pub use client::{BodyOf, Client, DEFAULT_REDIRECTS, MAX_JSON_BODY_LEN, Method, Options, Redirects};
pub use cookies::CookieJar;
pub use error::Error;
pub use headers::HeaderMap;
pub use http1::{Http1Body, Http1Connection, Http1Transport, MAX_HEAD_LEN};
pub use response::Response;
pub use transport::{Endpoint, HttpConnection, Scheme, Transport, WireRequest, WireResponse};
