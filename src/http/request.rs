use std::collections::HashMap;

use crate::http::cookie::{HttpCookie, JSESSIONID};

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive; methods are uppercase on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use coyote::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

/// Read-only view over one inbound request.
///
/// Controllers depend on this trait rather than on [`HttpRequest`] so they can
/// be driven by substitute requests in tests.
pub trait Request {
    fn method(&self) -> Method;

    /// Path without the query component.
    fn path(&self) -> &str;

    /// True iff the method matches and the path is exactly equal.
    fn consists_of(&self, method: Method, path: &str) -> bool;

    /// True iff the raw request target contained a `?`.
    fn has_query_string(&self) -> bool;

    /// True iff a `JSESSIONID` cookie was sent.
    fn has_session_id(&self) -> bool;

    fn query_parameter(&self, name: &str) -> Option<&str>;

    /// Looks up a field of an `application/x-www-form-urlencoded` body.
    fn form_parameter(&self, name: &str) -> Option<String>;

    /// Header lookup, case-insensitive on the name.
    fn header(&self, name: &str) -> Option<&str>;

    fn session_id(&self) -> Option<&str>;
}

/// A parsed HTTP request.
///
/// Built once per request cycle and never mutated afterwards. Header names are
/// stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path without the query component (e.g. "/login")
    pub path: String,
    /// Whether the raw target carried a `?`, even with an empty query
    pub has_query: bool,
    /// Decoded query parameters
    pub query: HashMap<String, String>,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers keyed by lowercased name
    pub headers: HashMap<String, String>,
    /// Cookies sent in the `Cookie` header
    pub cookies: HttpCookie,
    /// Request body for POST/PUT requests
    pub body: Vec<u8>,
}

/// Builder for constructing [`HttpRequest`] values.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the raw request target, e.g. `/login?account=gugu`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<HttpRequest, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;

        let (path, query_string) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query)),
            None => (target.clone(), None),
        };

        let query = query_string
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        let cookies = self
            .headers
            .get("cookie")
            .map(|raw| HttpCookie::parse(raw))
            .unwrap_or_default();

        Ok(HttpRequest {
            method,
            path,
            has_query: query_string.is_some(),
            query,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            cookies,
            body: self.body,
        })
    }
}

impl HttpRequest {
    /// Parses the Content-Length header. Returns 0 if missing or invalid.
    pub fn content_length(&self) -> usize {
        Request::header(self, "Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Determines whether the connection should remain open after the response.
    ///
    /// HTTP/1.1 defaults to keep-alive unless `Connection: close` is sent.
    pub fn keep_alive(&self) -> bool {
        Request::header(self, "Connection")
            .map(|v| !v.eq_ignore_ascii_case("close"))
            .unwrap_or(self.version != "HTTP/1.0")
    }
}

impl Request for HttpRequest {
    fn method(&self) -> Method {
        self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn consists_of(&self, method: Method, path: &str) -> bool {
        self.method == method && self.path == path
    }

    fn has_query_string(&self) -> bool {
        self.has_query
    }

    fn has_session_id(&self) -> bool {
        self.cookies.contains(JSESSIONID)
    }

    fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|v| v.as_str())
    }

    fn form_parameter(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(&self.body)
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    fn session_id(&self) -> Option<&str> {
        self.cookies.get(JSESSIONID)
    }
}
