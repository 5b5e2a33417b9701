//! The response handed back to callers.

use super::error::Error;
use super::headers::HeaderMap;
use super::transport::WireResponse;
use crate::network::{Close, Read};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Upper bound on the buffer reserved up front from `Content-Length`.
const MAX_RESERVE: usize = 64 * 1024;

/// An HTTP response.
///
/// The body is read at most once: [`content`](Self::content) drains the
/// stream, caches the bytes and closes the connection. Dropping an unread
/// response closes the connection without reading.
#[derive(Debug)]
pub struct Response<B: Close> {
    status_code: u16,
    reason: String,
    headers: HeaderMap,
    cookies: Vec<(String, String)>,
    raw: Option<B>,
    content: Option<Vec<u8>>,
}

impl<B, E> Response<B>
where
    B: Read<Error = E> + Close<Error = E>,
    E: core::fmt::Debug,
{
    /// Wraps a response received from a transport.
    pub fn new(wire: WireResponse<B>) -> Self {
        Self {
            status_code: wire.status,
            reason: wire.reason,
            headers: wire.headers,
            cookies: wire.cookies,
            raw: Some(wire.body),
            content: None,
        }
    }

    /// The status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The reason phrase; may be empty.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A response header, looked up ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Cookies set by this response.
    pub fn cookies(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Whether the connection has been released.
    pub fn is_closed(&self) -> bool {
        self.raw.is_none()
    }

    /// The body bytes, reading them on first call.
    ///
    /// The connection is closed once the body is read, including when the
    /// read fails. A response closed before its body was read has empty
    /// content.
    pub fn content(&mut self) -> Result<&[u8], E> {
        if self.content.is_none() {
            let body = match self.raw.take() {
                Some(mut raw) => {
                    let read = read_to_end(&mut raw, self.reserve_hint());
                    let closed = raw.close();
                    let body = read?;
                    closed?;
                    body
                }
                None => Vec::new(),
            };
            self.content = Some(body);
        }
        Ok(self.content.as_deref().unwrap_or_default())
    }

    /// The body as UTF-8 text.
    pub fn text(&mut self) -> Result<&str, Error<E>> {
        let content = self.content().map_err(Error::Transport)?;
        core::str::from_utf8(content).map_err(|_| Error::InvalidText)
    }

    /// Deserializes the body as JSON.
    ///
    /// The value may borrow strings from the cached body.
    pub fn json<'de, T: Deserialize<'de>>(&'de mut self) -> Result<T, Error<E>> {
        let content = self.content().map_err(Error::Transport)?;
        serde_json_core::from_slice(content)
            .map(|(value, _)| value)
            .map_err(|_| Error::Deserialize)
    }

    /// Releases the connection without reading the body.
    ///
    /// Closing an already closed response does nothing.
    pub fn close(&mut self) -> Result<(), E> {
        match self.raw.take() {
            Some(raw) => raw.close(),
            None => Ok(()),
        }
    }

    fn reserve_hint(&self) -> usize {
        self.headers
            .get("Content-Length")
            .and_then(|len| len.parse::<usize>().ok())
            .map_or(0, |len| len.min(MAX_RESERVE))
    }
}

impl<B: Close> Drop for Response<B> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            let _ = raw.close();
        }
    }
}

fn read_to_end<R: Read>(reader: &mut R, reserve: usize) -> Result<Vec<u8>, R::Error> {
    let mut body = Vec::with_capacity(reserve);
    let mut temp_buf = [0u8; 256];
    loop {
        match reader.read(&mut temp_buf)? {
            0 => return Ok(body),
            n => body.extend_from_slice(&temp_buf[..n]),
        }
    }
}
