/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 413 Payload Too Large
    PayloadTooLarge,
    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use coyote::http::response::StatusCode;
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::RequestHeaderFieldsTooLarge => 431,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Header names the server sets or reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpHeader {
    Location,
    SetCookie,
    Cookie,
    ContentType,
    ContentLength,
    Connection,
}

impl HttpHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpHeader::Location => "Location",
            HttpHeader::SetCookie => "Set-Cookie",
            HttpHeader::Cookie => "Cookie",
            HttpHeader::ContentType => "Content-Type",
            HttpHeader::ContentLength => "Content-Length",
            HttpHeader::Connection => "Connection",
        }
    }
}

/// What the serialization layer should put in the body.
///
/// Everything except `Pending` is a terminal action; a response carries at
/// most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing decided yet.
    Pending,
    /// Redirect to the given location; empty body.
    Redirect(String),
    /// Body is the static resource at this path.
    Resource(String),
    /// Inline body generated by the handler.
    Body { content_type: String, content: Vec<u8> },
}

impl Outcome {
    fn kind(&self) -> &'static str {
        match self {
            Outcome::Pending => "pending",
            Outcome::Redirect(_) => "redirect",
            Outcome::Resource(_) => "resource",
            Outcome::Body { .. } => "body",
        }
    }
}

/// Logic errors in how a handler builds a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// A second, different terminal action on one response.
    #[error("response already has a {existing} action, refusing {attempted}")]
    TerminalActionConflict {
        existing: &'static str,
        attempted: &'static str,
    },
}

/// Mutable side of one request cycle.
///
/// Implementations record calls in the order they arrive; the order of
/// headers is observable on the wire.
pub trait Response {
    /// Sets the status line and a `Location` header.
    fn set_response_redirect(
        &mut self,
        status: StatusCode,
        location: &str,
    ) -> Result<(), ResponseError>;

    /// Adds a header, replacing an earlier one with the same name in place.
    fn set_response_header(&mut self, name: HttpHeader, value: &str);

    /// Sets the status line and names a static resource as the body source.
    fn set_response_resource(
        &mut self,
        status: StatusCode,
        resource_path: &str,
    ) -> Result<(), ResponseError>;

    /// Sets the status line and an inline body.
    fn set_response_body(
        &mut self,
        status: StatusCode,
        content_type: &str,
        content: Vec<u8>,
    ) -> Result<(), ResponseError>;
}

/// Response under construction for one request cycle.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: Vec<(String, String)>,
    outcome: Outcome,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    /// An empty `200 OK` response with no terminal action.
    pub fn new() -> Self {
        Self {
            status: StatusCode::Ok,
            headers: Vec::new(),
            outcome: Outcome::Pending,
        }
    }

    /// A plain-text response with the reason phrase as body.
    pub fn plain(status: StatusCode) -> Self {
        let mut response = Self::new();
        response.status = status;
        response.outcome = Outcome::Body {
            content_type: "text/plain;charset=utf-8".to_string(),
            content: format!("{} {}", status.as_u16(), status.reason_phrase()).into_bytes(),
        };
        response
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Headers in the order they were set.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn put_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn settle(&mut self, status: StatusCode, outcome: Outcome) -> Result<(), ResponseError> {
        if self.outcome != Outcome::Pending {
            if self.outcome == outcome && self.status == status {
                return Ok(());
            }
            return Err(ResponseError::TerminalActionConflict {
                existing: self.outcome.kind(),
                attempted: outcome.kind(),
            });
        }

        self.status = status;
        self.outcome = outcome;
        Ok(())
    }
}

impl Response for HttpResponse {
    fn set_response_redirect(
        &mut self,
        status: StatusCode,
        location: &str,
    ) -> Result<(), ResponseError> {
        self.settle(status, Outcome::Redirect(location.to_string()))?;
        self.put_header(HttpHeader::Location.as_str(), location);
        Ok(())
    }

    fn set_response_header(&mut self, name: HttpHeader, value: &str) {
        self.put_header(name.as_str(), value);
    }

    fn set_response_resource(
        &mut self,
        status: StatusCode,
        resource_path: &str,
    ) -> Result<(), ResponseError> {
        self.settle(status, Outcome::Resource(resource_path.to_string()))
    }

    fn set_response_body(
        &mut self,
        status: StatusCode,
        content_type: &str,
        content: Vec<u8>,
    ) -> Result<(), ResponseError> {
        self.settle(
            status,
            Outcome::Body {
                content_type: content_type.to_string(),
                content,
            },
        )
    }
}
