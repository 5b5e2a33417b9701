//! Blocking TCP connections on top of `std::net`.
//!
//! Plain `http` only; `https` remotes are refused with
//! [`Error::Unsupported`] since TLS is left to platform connectors.

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};
use core::time::Duration;
use std::io::{ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

/// Opens [`TcpConnection`]s for `http://host:port` remotes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a connector.
    pub fn new() -> Self {
        Self
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str, timeout: Option<Duration>) -> Result<TcpConnection, Error> {
        let address = match remote.split_once("://") {
            Some(("http", address)) => address,
            Some(_) => return Err(Error::Unsupported),
            None => remote,
        };

        let stream = match timeout {
            Some(timeout) => connect_timeout(address, timeout)?,
            None => TcpStream::connect(address).map_err(|_| Error::ConnectionRefused)?,
        };
        stream.set_read_timeout(timeout).map_err(|_| Error::InvalidAddress)?;
        stream.set_write_timeout(timeout).map_err(|_| Error::InvalidAddress)?;

        Ok(TcpConnection { stream })
    }
}

fn connect_timeout(address: &str, timeout: Duration) -> Result<TcpStream, Error> {
    let addrs = address.to_socket_addrs().map_err(|_| Error::InvalidAddress)?;
    let mut last = Error::InvalidAddress;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) if e.kind() == ErrorKind::TimedOut => last = Error::Timeout,
            Err(_) => last = Error::ConnectionRefused,
        }
    }
    Err(last)
}

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.stream.read(buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => Error::Timeout,
            _ => Error::ReadError,
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // Already reset by the peer.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(_) => Err(Error::ConnectionClosed),
        }
    }
}

impl Connection for TcpConnection {}
