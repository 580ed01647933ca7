use crate::http::request::{HttpRequest, Method, RequestBuilder};

/// Largest request line plus header section accepted, excluding the blank line.
pub const MAX_HEADER_BYTES: usize = 8 * 1024;
/// Largest `Content-Length` accepted.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid request line")]
    InvalidRequest,
    #[error("unsupported method")]
    InvalidMethod,
    #[error("malformed header line")]
    InvalidHeader,
    #[error("invalid Content-Length")]
    InvalidContentLength,
    #[error("request incomplete")]
    Incomplete,
    #[error("header section exceeds {MAX_HEADER_BYTES} bytes")]
    HeadersTooLarge,
    #[error("body exceeds {MAX_BODY_BYTES} bytes")]
    PayloadTooLarge,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied, or
/// [`ParseError::Incomplete`] when more bytes are needed. Requests whose
/// header section or declared body exceed [`MAX_HEADER_BYTES`] or
/// [`MAX_BODY_BYTES`] are rejected without waiting for the rest.
pub fn parse_http_request(buf: &[u8]) -> Result<(HttpRequest, usize), ParseError> {
    // Look for header/body separator, only within the header limit
    let headers_end = match find_headers_end(buf) {
        Some(end) => end,
        None if buf.len() > MAX_HEADER_BYTES + 3 => return Err(ParseError::HeadersTooLarge),
        None => return Err(ParseError::Incomplete),
    };
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    if !target.starts_with('/') {
        return Err(ParseError::InvalidRequest);
    }

    let mut builder = RequestBuilder::new()
        .method(method)
        .target(target)
        .version(version);

    let mut content_length = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(ParseError::InvalidHeader)?;
        let (key, value) = (key.trim(), value.trim());

        if key.is_empty() {
            return Err(ParseError::InvalidHeader);
        }

        if key.eq_ignore_ascii_case("Content-Length") {
            let length = value
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)?;
            if length > MAX_BODY_BYTES {
                return Err(ParseError::PayloadTooLarge);
            }
            content_length = Some(length);
        }

        builder = builder.header(key, value);
    }

    // Body
    let content_length = content_length.unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let request = builder
        .body(body_bytes[..content_length].to_vec())
        .build()
        .map_err(|_| ParseError::InvalidRequest)?;

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    let window = &buf[..buf.len().min(MAX_HEADER_BYTES + 4)];
    window.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
