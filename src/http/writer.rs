use std::time::SystemTime;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Outbound version is not negotiated; every response is HTTP/1.1
/// regardless of what the request line carried.
const HTTP_VERSION: &str = "HTTP/1.1";

/// Current time for the `Date` header, RFC 7231 format.
pub fn http_date() -> String {
    httpdate::fmt_http_date(SystemTime::now())
}

/// Serializes a response into its exact wire bytes: status line, the four
/// fixed headers (Date, Content-Type, Content-Length, Connection), a blank
/// line, then the body.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let head = format!(
        "{} {} {}\r\nDate: {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        http_date(),
        resp.content_type.as_str(),
        resp.body.len(),
        resp.conn.as_str(),
    );

    let mut buf = Vec::with_capacity(head.len() + resp.body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

/// Writes one serialized response to a stream in full.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
