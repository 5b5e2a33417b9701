#![allow(dead_code)]

use core::time::Duration;
use librequests::network::application::http::{
    CookieJar, Endpoint, HeaderMap, HttpConnection, Method, Scheme, Transport, WireRequest, WireResponse,
};
use librequests::network::error::Error;
use librequests::network::{Close, Connect, Connection, Read, Write};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Failures a scripted transport can be told to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Refused,
    Exhausted,
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    reason: String,
    headers: HeaderMap,
    cookies: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Reply {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: String::from("OK"),
            headers: HeaderMap::new(),
            cookies: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn redirect(status: u16, location: &str) -> Self {
        Self::new(status).header("Location", location)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }
}

/// What the client handed to the transport for one exchange.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub scheme: Scheme,
    pub host: String,
    pub port: Option<u16>,
    pub timeout: Option<Duration>,
    pub method: Method,
    pub target: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub cookies: CookieJar,
}

/// A transport that answers from a script and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: VecDeque<Result<Reply, MockError>>,
    requests: Rc<RefCell<Vec<Recorded>>>,
    opened: usize,
    closed: Rc<Cell<usize>>,
}

impl ScriptedTransport {
    pub fn new<I: IntoIterator<Item = Reply>>(replies: I) -> Self {
        Self {
            script: replies.into_iter().map(Ok).collect(),
            ..Self::default()
        }
    }

    pub fn failing(error: MockError) -> Self {
        Self {
            script: VecDeque::from([Err(error)]),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn opened(&self) -> usize {
        self.opened
    }

    pub fn closed(&self) -> usize {
        self.closed.get()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Transport for ScriptedTransport {
    type Error = MockError;
    type Connection = ScriptedConnection;

    fn open(&mut self, endpoint: &Endpoint<'_>, timeout: Option<Duration>) -> Result<ScriptedConnection, MockError> {
        let reply = self.script.pop_front().unwrap_or(Err(MockError::Exhausted))?;
        self.opened += 1;
        Ok(ScriptedConnection {
            scheme: endpoint.scheme,
            host: endpoint.host.to_string(),
            port: endpoint.port,
            timeout,
            reply,
            requests: Rc::clone(&self.requests),
            closed: Rc::clone(&self.closed),
        })
    }
}

#[derive(Debug)]
pub struct ScriptedConnection {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    timeout: Option<Duration>,
    reply: Reply,
    requests: Rc<RefCell<Vec<Recorded>>>,
    closed: Rc<Cell<usize>>,
}

impl HttpConnection for ScriptedConnection {
    type Error = MockError;
    type Body = ScriptedBody;

    fn send(self, request: &WireRequest<'_>) -> Result<WireResponse<ScriptedBody>, MockError> {
        self.requests.borrow_mut().push(Recorded {
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            timeout: self.timeout,
            method: request.method,
            target: request.target.to_string(),
            headers: request.headers.clone(),
            body: request.body.map(<[u8]>::to_vec),
            cookies: request.cookies.clone(),
        });

        let reply = self.reply;
        Ok(WireResponse {
            status: reply.status,
            reason: reply.reason,
            headers: reply.headers,
            cookies: reply.cookies,
            body: ScriptedBody {
                data: reply.body,
                pos: 0,
                closed: self.closed,
            },
        })
    }
}

#[derive(Debug)]
pub struct ScriptedBody {
    data: Vec<u8>,
    pos: usize,
    closed: Rc<Cell<usize>>,
}

impl Read for ScriptedBody {
    type Error = MockError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Close for ScriptedBody {
    type Error = MockError;

    fn close(self) -> Result<(), MockError> {
        self.closed.set(self.closed.get() + 1);
        Ok(())
    }
}

/// A byte connection that replays a canned server response and keeps what
/// the client wrote.
#[derive(Debug)]
pub struct MockConnection {
    incoming: Vec<u8>,
    read_pos: usize,
    chunk: usize,
    read_error: Option<Error>,
    written: Rc<RefCell<Vec<u8>>>,
    closed: Rc<Cell<bool>>,
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.read_pos == self.incoming.len() {
            if let Some(error) = self.read_error {
                return Err(error);
            }
        }
        let readable = self.incoming.len() - self.read_pos;
        let len = buf.len().min(readable).min(self.chunk);
        buf[..len].copy_from_slice(&self.incoming[self.read_pos..self.read_pos + len]);
        self.read_pos += len;
        Ok(len)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.closed.set(true);
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Hands out [`MockConnection`]s that answer with `response`.
#[derive(Debug)]
pub struct MockNetwork {
    response: Vec<u8>,
    chunk: usize,
    pub remotes: Vec<String>,
    pub written: Rc<RefCell<Vec<u8>>>,
    pub closed: Rc<Cell<bool>>,
    /// Returned by `connect` instead of a connection.
    pub connect_error: Option<Error>,
    /// Returned by `read` once the canned response is used up.
    pub read_error: Option<Error>,
}

impl MockNetwork {
    pub fn new(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            chunk: usize::MAX,
            remotes: Vec::new(),
            written: Rc::new(RefCell::new(Vec::new())),
            closed: Rc::new(Cell::new(false)),
            connect_error: None,
            read_error: None,
        }
    }

    /// Deliver at most `chunk` bytes per read.
    pub fn chunked(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn written(&self) -> String {
        String::from_utf8(self.written.borrow().clone()).unwrap()
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str, _timeout: Option<Duration>) -> Result<MockConnection, Error> {
        self.remotes.push(remote.to_string());
        if let Some(error) = self.connect_error {
            return Err(error);
        }
        Ok(MockConnection {
            incoming: self.response.clone(),
            read_pos: 0,
            chunk: self.chunk,
            read_error: self.read_error,
            written: Rc::clone(&self.written),
            closed: Rc::clone(&self.closed),
        })
    }
}
