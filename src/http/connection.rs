use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::FileHandler;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted client: a single request, a single response, then close.
pub struct Connection<S> {
    stream: S,
    handler: Arc<FileHandler>,
    buffer_capacity: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<FileHandler>, buffer_capacity: usize) -> Self {
        Self {
            stream,
            handler,
            buffer_capacity,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => {
                            tracing::debug!("Peer closed before sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;

                    tracing::trace!(bytes = writer.written(), "Response written");

                    // No keep-alive: one exchange per connection.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // The peer may already be gone; the response is out either way.
        let _ = self.stream.shutdown().await;

        Ok(())
    }

    /// Performs the connection's only read and parses what arrived.
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut buffer = BytesMut::zeroed(self.buffer_capacity);

        let n = self
            .stream
            .read(&mut buffer)
            .await
            .context("failed to read request")?;

        if n == 0 {
            return Ok(None);
        }

        if n == self.buffer_capacity {
            tracing::debug!(
                capacity = self.buffer_capacity,
                "Request filled the read buffer, anything beyond it is dropped"
            );
        }

        buffer.truncate(n);
        let request = parse_http_request(buffer.freeze())?;

        Ok(Some(request))
    }
}
