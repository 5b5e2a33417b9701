use criterion::{Criterion, Throughput};
use librequests::network::application::http::{Client, Http1Transport, Options};
use librequests::network::error::Error;
use librequests::network::{Close, Connect, Connection, Read, Write};
use std::time::Duration;

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: application/json\r\n\
Content-Length: 27\r\n\
Set-Cookie: sid=abc; Path=/\r\n\
\r\n\
{\"ok\":true,\"readings\":1024}";

struct MemoryConnection {
    pos: usize,
}

impl Read for MemoryConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(RESPONSE.len() - self.pos);
        buf[..n].copy_from_slice(&RESPONSE[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for MemoryConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MemoryConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for MemoryConnection {}

struct MemoryNetwork;

impl Connect for MemoryNetwork {
    type Connection = MemoryConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str, _timeout: Option<Duration>) -> Result<MemoryConnection, Error> {
        Ok(MemoryConnection { pos: 0 })
    }
}

pub fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("client");
    group.throughput(Throughput::Bytes(RESPONSE.len() as u64));
    group.bench_function("get_in_memory", |b| {
        let mut client = Client::new(Http1Transport::new(MemoryNetwork));
        b.iter(|| {
            let mut response = client
                .get(
                    "http://user:pw@example.com/api/readings?since=0",
                    Options::new().params(&[("limit", "10")]),
                )
                .expect("request failed");
            response.text().map(str::len).expect("body is text")
        });
    });
    group.finish();
}
