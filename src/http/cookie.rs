//! Cookie header handling.

use std::collections::HashMap;

/// Name of the cookie carrying the session id.
pub const JSESSIONID: &str = "JSESSIONID";

/// Cookies sent by the client in a `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpCookie {
    values: HashMap<String, String>,
}

impl HttpCookie {
    /// Parses a `Cookie` header value such as `yummy_cookie=choco; JSESSIONID=abc`.
    ///
    /// Pairs without `=` are skipped. A later duplicate name wins.
    pub fn parse(raw: &str) -> Self {
        let values = raw
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Formats the `Set-Cookie` value that hands a session id to the browser.
pub fn session_cookie(session_id: &str) -> String {
    format!("{JSESSIONID}={session_id}")
}
