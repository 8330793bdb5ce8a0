use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::StaticFilesConfig;
use crate::http::codec::ConnDirective;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::static_files;

/// One accepted socket, driven from first byte to shutdown.
///
/// The session is an explicit state machine. Suspension points are the
/// three socket operations (header read, body read, response write);
/// parsing and file serving run to completion in between.
pub struct Session {
    stream: TcpStream,
    buffer: BytesMut,
    static_files: StaticFilesConfig,
    state: SessionState,
}

pub enum SessionState {
    ReadingHeader,
    ReadingBody(Request),
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive
    Closed,
}

impl Session {
    pub fn new(stream: TcpStream, static_files: StaticFilesConfig) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            static_files,
            state: SessionState::ReadingHeader,
        }
    }

    /// Serves requests until the connection ends, then shuts the socket
    /// down regardless of how it ended.
    ///
    /// `Err` means the peer sent bytes we refuse to parse; transport
    /// failures (EOF, reset, write errors) end the session quietly.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.shutdown().await;
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                SessionState::ReadingHeader => {
                    match self.read_header_block().await {
                        Ok(Some(raw)) => {
                            let request = parser::parse(&raw)?;
                            self.state = if request.unread() > 0 {
                                SessionState::ReadingBody(request)
                            } else {
                                SessionState::Processing(request)
                            };
                        }
                        Ok(None) => {
                            debug!("connection closed by peer");
                            self.state = SessionState::Closed;
                        }
                        Err(e) => {
                            debug!("read failed: {}", e);
                            self.state = SessionState::Closed;
                        }
                    }
                }

                SessionState::ReadingBody(request) => {
                    // Drain the rest of the declared body so it cannot be
                    // mistaken for the next request's header block.
                    let mut rest = vec![0u8; request.unread()];
                    match self.stream.read_exact(&mut rest).await {
                        Ok(_) => {
                            request.body.extend_from_slice(&rest);
                            let request = std::mem::take(request);
                            self.state = SessionState::Processing(request);
                        }
                        Err(e) => {
                            debug!("connection ended mid-body: {}", e);
                            self.state = SessionState::Closed;
                        }
                    }
                }

                SessionState::Processing(request) => {
                    let response = static_files::serve(request, &self.static_files.root);
                    debug!(
                        "{} {} -> {}",
                        request.method.as_str(),
                        request.path,
                        response.status.as_u16()
                    );

                    let keep_alive = response.conn == ConnDirective::KeepAlive;
                    let writer = ResponseWriter::new(&response);
                    self.state = SessionState::Writing(writer, keep_alive);
                }

                SessionState::Writing(writer, keep_alive) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        debug!("write failed: {}", e);
                        self.state = SessionState::Closed;
                    } else if *keep_alive {
                        self.state = SessionState::ReadingHeader; // go back for next request
                    } else {
                        self.state = SessionState::Closed;
                    }
                }

                SessionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates bytes until the `\r\n\r\n` header terminator shows up,
    /// then hands back everything received so far (any body prefix rides
    /// along). `Ok(None)` means the peer closed before completing a
    /// header block.
    async fn read_header_block(&mut self) -> std::io::Result<Option<BytesMut>> {
        loop {
            if parser::find_header_end(&self.buffer).is_some() {
                return Ok(Some(self.buffer.split()));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                return Ok(None);
            }
        }
    }

    async fn shutdown(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!("socket shutdown failed: {}", e);
        }
    }
}
