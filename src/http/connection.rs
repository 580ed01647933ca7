use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{HttpRequest, Method};
use crate::http::response::{HttpResponse, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::server::AppState;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    app: Arc<AppState>,
}

pub enum ConnectionState {
    Reading,
    Processing(HttpRequest),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<AppState>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            app,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await {
                        Ok(Some(req)) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        Ok(None) => {
                            self.state = ConnectionState::Closed;
                        }
                        Err(e) => {
                            // Malformed or oversized request: answer once, then hang up
                            tracing::warn!("Rejecting request: {}", e);
                            let writer = ResponseWriter::prepare(
                                &HttpResponse::plain(rejection_status(&e)),
                                &self.app.static_root,
                                false,
                                false,
                            )
                            .await?;
                            self.state = ConnectionState::Writing(writer, false);
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let keep_alive = req.keep_alive();
                    let head_only = req.method == Method::HEAD;
                    let response = self.app.dispatcher.dispatch(&*req);

                    let writer = ResponseWriter::prepare(
                        &response,
                        &self.app.static_root,
                        keep_alive,
                        head_only,
                    )
                    .await?;
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> Result<Option<HttpRequest>, ParseError> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => return Err(e),
            }

            // Read more data
            let n = match self.stream.read_buf(&mut self.buffer).await {
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Read failed: {}", e);
                    return Ok(None);
                }
            };

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }
        }
    }
}

/// Status answering a request the parser refused.
fn rejection_status(error: &ParseError) -> StatusCode {
    match error {
        ParseError::HeadersTooLarge => StatusCode::RequestHeaderFieldsTooLarge,
        ParseError::PayloadTooLarge => StatusCode::PayloadTooLarge,
        _ => StatusCode::BadRequest,
    }
}
