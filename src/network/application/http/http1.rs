//! HTTP/1.1 over any byte [`Connection`].
//!
//! One connection carries one exchange (`Connection: close`). The response
//! head must fit in [`MAX_HEAD_LEN`] bytes; the body is streamed afterwards,
//! bounded by `Content-Length` when the server sends one and by connection
//! close otherwise.

use super::client::Method;
use super::headers::HeaderMap;
use super::transport::{Endpoint, HttpConnection, Transport, WireRequest, WireResponse};
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Write};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::time::Duration;

/// Largest response head (status line and headers) accepted.
pub const MAX_HEAD_LEN: usize = 2048;

/// A [`Transport`] speaking HTTP/1.1 over connections opened by a [`Connect`]or.
///
/// The connector receives `scheme://host:port`; a connector without TLS
/// support should refuse `https`. Errors raised by the connector and its
/// connections are passed through unchanged.
#[derive(Debug)]
pub struct Http1Transport<N: Connect> {
    connector: N,
}

impl<N: Connect> Http1Transport<N> {
    /// Wraps a connector.
    pub fn new(connector: N) -> Self {
        Self { connector }
    }

    /// The wrapped connector.
    pub fn connector(&self) -> &N {
        &self.connector
    }

    /// Mutable access to the wrapped connector.
    pub fn connector_mut(&mut self) -> &mut N {
        &mut self.connector
    }
}

impl<N> Transport for Http1Transport<N>
where
    N: Connect,
    N::Error: Into<Error>,
    <N::Connection as Read>::Error: Into<Error>,
    <N::Connection as Write>::Error: Into<Error>,
    <N::Connection as Close>::Error: Into<Error>,
{
    type Error = Error;
    type Connection = Http1Connection<N::Connection>;

    fn open(&mut self, endpoint: &Endpoint<'_>, timeout: Option<Duration>) -> Result<Self::Connection, Error> {
        let host = bracketed(endpoint.host);
        let remote = format!("{}://{}:{}", endpoint.scheme.as_str(), host, endpoint.port_or_default());
        let connection = match self.connector.connect(&remote, timeout) {
            Ok(connection) => connection,
            Err(e) => return Err(e.into()),
        };

        let host_header = match endpoint.port {
            Some(port) if port != endpoint.scheme.default_port() => format!("{host}:{port}"),
            _ => String::from(host),
        };

        Ok(Http1Connection {
            connection,
            host_header,
        })
    }
}

/// An open connection waiting to send its request.
#[derive(Debug)]
pub struct Http1Connection<C: Connection> {
    connection: C,
    host_header: String,
}

impl<C: Connection> Http1Connection<C> {
    /// Wraps an already open connection; `host` is sent as the `Host` header.
    pub fn new(connection: C, host: &str) -> Self {
        Self {
            connection,
            host_header: String::from(host),
        }
    }
}

impl<C> HttpConnection for Http1Connection<C>
where
    C: Connection,
    <C as Read>::Error: Into<Error>,
    <C as Write>::Error: Into<Error>,
    <C as Close>::Error: Into<Error>,
{
    type Error = Error;
    type Body = Http1Body<C>;

    fn send(mut self, request: &WireRequest<'_>) -> Result<WireResponse<Http1Body<C>>, Error> {
        // --- Send Request ---
        let head = encode_head(request, &self.host_header)?;
        write_all(&mut self.connection, &head)?;
        if let Some(body) = request.body {
            write_all(&mut self.connection, body)?;
        }
        if let Err(e) = self.connection.flush() {
            return Err(e.into());
        }

        // --- Receive Response Head ---
        let mut response_buf = [0u8; MAX_HEAD_LEN];
        let mut total_read = 0;
        let header_end_pos = loop {
            if total_read == response_buf.len() {
                // Head larger than our buffer.
                return Err(Error::ProtocolError);
            }
            let n = match self.connection.read(&mut response_buf[total_read..]) {
                Ok(0) => return Err(Error::ConnectionClosed),
                Ok(n) => n,
                Err(e) => return Err(e.into()),
            };
            // A terminator can straddle the previous read.
            let start = total_read.saturating_sub(3);
            total_read += n;
            if let Some(pos) = find_slice(&response_buf[start..total_read], b"\r\n\r\n") {
                break start + pos;
            }
        };

        // --- Parse Response Head ---
        let head = parse_head(&response_buf[..header_end_pos])?;

        let no_body = request.method == Method::Head
            || head.status / 100 == 1
            || head.status == 204
            || head.status == 304;
        let remaining = if no_body { Some(0) } else { head.content_length };

        let mut buffered = heapless::Vec::new();
        buffered
            .extend_from_slice(&response_buf[header_end_pos + 4..total_read])
            .map_err(|_| Error::ProtocolError)?;

        Ok(WireResponse {
            status: head.status,
            reason: head.reason,
            headers: head.headers,
            cookies: head.cookies,
            body: Http1Body {
                connection: self.connection,
                buffered,
                offset: 0,
                remaining,
            },
        })
    }
}

/// The body of an HTTP/1.1 response, still attached to its connection.
#[derive(Debug)]
pub struct Http1Body<C: Connection> {
    connection: C,
    buffered: heapless::Vec<u8, MAX_HEAD_LEN>,
    offset: usize,
    remaining: Option<usize>,
}

impl<C: Connection> Http1Body<C> {
    /// Bytes still expected, when the server announced a length.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<C> Read for Http1Body<C>
where
    C: Connection,
    <C as Read>::Error: Into<Error>,
{
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let limit = match self.remaining {
            Some(0) => return Ok(0),
            Some(n) => n.min(buf.len()),
            None => buf.len(),
        };
        if limit == 0 {
            return Ok(0);
        }

        let n = if self.offset < self.buffered.len() {
            let pending = &self.buffered[self.offset..];
            let n = pending.len().min(limit);
            buf[..n].copy_from_slice(&pending[..n]);
            self.offset += n;
            n
        } else {
            match self.connection.read(&mut buf[..limit]) {
                Ok(n) => n,
                Err(e) => return Err(e.into()),
            }
        };

        if let Some(remaining) = self.remaining.as_mut() {
            if n == 0 {
                // Prematurely closed
                return Err(Error::ConnectionClosed);
            }
            *remaining -= n;
        }
        Ok(n)
    }
}

impl<C> Close for Http1Body<C>
where
    C: Connection,
    <C as Close>::Error: Into<Error>,
{
    type Error = Error;

    fn close(self) -> Result<(), Error> {
        self.connection.close().map_err(Into::into)
    }
}

struct Head {
    status: u16,
    reason: String,
    headers: HeaderMap,
    cookies: Vec<(String, String)>,
    content_length: Option<usize>,
}

fn encode_head(request: &WireRequest<'_>, host: &str) -> Result<Vec<u8>, Error> {
    let target = if request.target.is_empty() { "/" } else { request.target };
    let cookie = match (request.headers.get("Cookie"), request.cookies.header_value()) {
        (Some(own), Some(jar)) => Some(format!("{own}; {jar}")),
        (None, jar) => jar,
        (Some(_), None) => None,
    };

    let mut buf: Vec<u8> = Vec::with_capacity(256);

    // Request line
    buf.extend_from_slice(request.method.as_str().as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(target.as_bytes());
    buf.extend_from_slice(b" HTTP/1.1\r\n");

    // Headers
    if !request.headers.contains("Host") {
        push_header(&mut buf, "Host", host);
    }
    for (name, value) in request.headers.iter() {
        if cookie.is_some() && name.eq_ignore_ascii_case("Cookie") {
            continue;
        }
        push_header(&mut buf, name, value);
    }
    if let Some(cookie) = &cookie {
        push_header(&mut buf, "Cookie", cookie);
    }
    if let Some(body) = request.body {
        if !request.headers.contains("Content-Length") {
            let mut len_str: heapless::String<20> = heapless::String::new();
            write!(len_str, "{}", body.len()).map_err(|_| Error::WriteError)?;
            push_header(&mut buf, "Content-Length", &len_str);
        }
    }
    if !request.headers.contains("Connection") {
        push_header(&mut buf, "Connection", "close");
    }
    buf.extend_from_slice(b"\r\n");

    Ok(buf)
}

fn push_header(buf: &mut Vec<u8>, name: &str, value: &str) {
    buf.extend_from_slice(name.as_bytes());
    buf.extend_from_slice(b": ");
    buf.extend_from_slice(value.as_bytes());
    buf.extend_from_slice(b"\r\n");
}

fn parse_head(data: &[u8]) -> Result<Head, Error> {
    let header_str = core::str::from_utf8(data).map_err(|_| Error::ProtocolError)?;
    let mut lines = header_str.split("\r\n");

    // Parse status line
    let status_line = lines.next().ok_or(Error::ProtocolError)?;
    let mut status_parts = status_line.splitn(3, ' ');
    let version = status_parts.next().ok_or(Error::ProtocolError)?;
    if !version.starts_with("HTTP/") {
        return Err(Error::ProtocolError);
    }
    let status = status_parts
        .next()
        .ok_or(Error::ProtocolError)?
        .parse::<u16>()
        .map_err(|_| Error::ProtocolError)?;
    let reason = String::from(status_parts.next().unwrap_or("").trim());

    // Parse headers
    let mut headers = HeaderMap::new();
    let mut cookies = Vec::new();
    let mut content_length = None;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let (name, value) = line.split_once(':').ok_or(Error::ProtocolError)?;
        let (name, value) = (name.trim(), value.trim());

        if name.eq_ignore_ascii_case("Content-Length") {
            content_length = value.parse::<usize>().ok();
        } else if name.eq_ignore_ascii_case("Set-Cookie") {
            if let Some((cookie_name, cookie_value)) = parse_set_cookie(value) {
                cookies.push((String::from(cookie_name), String::from(cookie_value)));
            }
        }
        headers.append(name, value);
    }

    Ok(Head {
        status,
        reason,
        headers,
        cookies,
        content_length,
    })
}

/// Extracts `name=value` from a `Set-Cookie` value, ignoring attributes.
fn parse_set_cookie(value: &str) -> Option<(&str, &str)> {
    let pair = value.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim().trim_matches('"')))
}

fn write_all<C>(connection: &mut C, mut buf: &[u8]) -> Result<(), Error>
where
    C: Write,
    C::Error: Into<Error>,
{
    while !buf.is_empty() {
        match connection.write(buf) {
            Ok(0) => return Err(Error::WriteError),
            Ok(n) => buf = &buf[n..],
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn bracketed(host: &str) -> String {
    if host.contains(':') {
        format!("[{host}]")
    } else {
        String::from(host)
    }
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
