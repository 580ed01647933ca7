use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime;
use crate::http::response::{HttpHeader, HttpResponse, Outcome, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Served in place of a resource that does not exist.
pub const NOT_FOUND_RESOURCE: &str = "/404.html";

fn serialize_response(
    status: StatusCode,
    headers: &[(String, String)],
    content_type: Option<&str>,
    body: &[u8],
    keep_alive: bool,
    send_body: bool,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256 + body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in the order the handler set them
    let mut push_header = |k: &str, v: &str| {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    };

    for (k, v) in headers {
        push_header(k.as_str(), v.as_str());
    }
    if let Some(content_type) = content_type {
        push_header(HttpHeader::ContentType.as_str(), content_type);
    }
    push_header(HttpHeader::ContentLength.as_str(), body.len().to_string().as_str());
    if !keep_alive {
        push_header(HttpHeader::Connection.as_str(), "close");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body; a HEAD response keeps the Content-Length of the body it omits
    if send_body {
        buf.extend_from_slice(body);
    }

    buf
}

/// Reads a resource from under `root`.
///
/// Returns `Ok(None)` when the resource does not exist or tries to escape
/// the root. Other I/O failures are errors.
pub async fn load_resource(
    root: &Path,
    resource_path: &str,
) -> anyhow::Result<Option<Vec<u8>>> {
    let relative = resource_path.trim_start_matches('/');

    if relative.is_empty() || relative.split(['/', '\\']).any(|segment| segment == "..") {
        return Ok(None);
    }

    match tokio::fs::read(root.join(relative)).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to load resource {resource_path}")),
    }
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    /// Resolves the response body and serializes the whole response.
    ///
    /// With `head_only` the body is resolved for its length but not sent.
    pub async fn prepare(
        response: &HttpResponse,
        static_root: &Path,
        keep_alive: bool,
        head_only: bool,
    ) -> anyhow::Result<Self> {
        let mut status = response.status();

        let (content_type, body) = match response.outcome() {
            Outcome::Pending | Outcome::Redirect(_) => (None, Vec::new()),
            Outcome::Body { content_type, content } => {
                (Some(content_type.clone()), content.clone())
            }
            Outcome::Resource(path) => match load_resource(static_root, path).await? {
                Some(bytes) => (Some(mime::from_path(path).to_string()), bytes),
                None => {
                    tracing::debug!(resource = %path, "Resource not found");
                    status = StatusCode::NotFound;
                    match load_resource(static_root, NOT_FOUND_RESOURCE).await? {
                        Some(bytes) => {
                            (Some(mime::from_path(NOT_FOUND_RESOURCE).to_string()), bytes)
                        }
                        None => (
                            Some("text/plain;charset=utf-8".to_string()),
                            b"404 Not Found".to_vec(),
                        ),
                    }
                }
            },
        };

        Ok(Self::from_parts(
            status,
            response.headers(),
            content_type.as_deref(),
            &body,
            keep_alive,
            !head_only,
        ))
    }

    /// Serializes a response whose body is already in memory.
    pub fn from_parts(
        status: StatusCode,
        headers: &[(String, String)],
        content_type: Option<&str>,
        body: &[u8],
        keep_alive: bool,
        send_body: bool,
    ) -> Self {
        Self {
            buffer: serialize_response(status, headers, content_type, body, keep_alive, send_body),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
