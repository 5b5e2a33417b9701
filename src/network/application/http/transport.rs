//! The transport collaborator the request loop drives.
//!
//! A [`Transport`] opens one [`HttpConnection`] per request/response
//! exchange. The connection is consumed by [`HttpConnection::send`] and lives
//! on inside the response body, so closing the body releases the connection.

use super::client::Method;
use super::cookies::CookieJar;
use super::headers::HeaderMap;
use crate::network::{Close, Read};
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

/// URL schemes the client can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS. TLS itself is the transport's business.
    Https,
}

impl Scheme {
    /// Parses a lower-case scheme name.
    pub fn parse(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }

    /// The scheme name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// The well-known port for the scheme.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

/// Where to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Connection scheme.
    pub scheme: Scheme,
    /// Host name or address; IPv6 literals come without brackets.
    pub host: &'a str,
    /// Explicit port from the URL, if any.
    pub port: Option<u16>,
}

impl Endpoint<'_> {
    /// The explicit port, or the scheme's default.
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }
}

/// One request as handed to a connection.
#[derive(Debug, Clone, Copy)]
pub struct WireRequest<'a> {
    /// Request method.
    pub method: Method,
    /// Path and query, e.g. `/a/b?x=1`.
    pub target: &'a str,
    /// Request headers, including any `Authorization`.
    pub headers: &'a HeaderMap,
    /// Request body.
    pub body: Option<&'a [u8]>,
    /// Cookies to send.
    pub cookies: &'a CookieJar,
}

/// Status, headers and body stream of a response as produced by a connection.
#[derive(Debug)]
pub struct WireResponse<B> {
    /// Status code.
    pub status: u16,
    /// Reason phrase; may be empty.
    pub reason: String,
    /// Response headers.
    pub headers: HeaderMap,
    /// Cookies set by the response, as `(name, value)` pairs.
    pub cookies: Vec<(String, String)>,
    /// The unread body. Closing it closes the connection.
    pub body: B,
}

/// Opens connections for the request loop.
pub trait Transport {
    /// Associated error type, surfaced unchanged to callers.
    type Error: core::fmt::Debug;
    /// Associated connection type
    type Connection: HttpConnection<Error = Self::Error>;

    /// Open a connection to `endpoint`.
    ///
    /// `timeout` is a per-call budget for connecting and reading.
    fn open(&mut self, endpoint: &Endpoint<'_>, timeout: Option<Duration>) -> Result<Self::Connection, Self::Error>;
}

/// A connection able to carry a single request/response exchange.
pub trait HttpConnection {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Body stream; owns the connection from here on.
    type Body: Read<Error = Self::Error> + Close<Error = Self::Error>;

    /// Send `request` and receive the response status and headers.
    fn send(self, request: &WireRequest<'_>) -> Result<WireResponse<Self::Body>, Self::Error>;
}
