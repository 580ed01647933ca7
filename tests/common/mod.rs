//! Substitute collaborators for controller tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use coyote::auth::{AuthError, Authenticator};
use coyote::http::request::{Method, Request};
use coyote::http::response::{HttpHeader, Response, ResponseError, StatusCode};

/// Request with only the fields a test sets.
pub struct FakeRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<HashMap<String, String>>,
    pub form: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub session_id: Option<String>,
}

impl FakeRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: None,
            form: HashMap::new(),
            headers: HashMap::new(),
            session_id: None,
        }
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn form(mut self, name: &str, value: &str) -> Self {
        self.form.insert(name.to_string(), value.to_string());
        self
    }

    pub fn session(mut self, id: &str) -> Self {
        self.session_id = Some(id.to_string());
        self
    }
}

impl Request for FakeRequest {
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
        self.query.is_some()
    }

    fn has_session_id(&self) -> bool {
        self.session_id.is_some()
    }

    fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query.as_ref()?.get(name).map(|v| v.as_str())
    }

    fn form_parameter(&self, name: &str) -> Option<String> {
        self.form.get(name).cloned()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}

/// One recorded call on a [`RecordingResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Redirect(StatusCode, String),
    Header(HttpHeader, String),
    Resource(StatusCode, String),
    Body(StatusCode, String),
}

/// Response that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingResponse {
    pub calls: Vec<Call>,
}

impl Response for RecordingResponse {
    fn set_response_redirect(
        &mut self,
        status: StatusCode,
        location: &str,
    ) -> Result<(), ResponseError> {
        self.calls.push(Call::Redirect(status, location.to_string()));
        Ok(())
    }

    fn set_response_header(&mut self, name: HttpHeader, value: &str) {
        self.calls.push(Call::Header(name, value.to_string()));
    }

    fn set_response_resource(
        &mut self,
        status: StatusCode,
        resource_path: &str,
    ) -> Result<(), ResponseError> {
        self.calls.push(Call::Resource(status, resource_path.to_string()));
        Ok(())
    }

    fn set_response_body(
        &mut self,
        status: StatusCode,
        _content_type: &str,
        content: Vec<u8>,
    ) -> Result<(), ResponseError> {
        self.calls
            .push(Call::Body(status, String::from_utf8_lossy(&content).into_owned()));
        Ok(())
    }
}

/// Authenticator with canned answers that counts how it was called.
pub struct StubAuthenticator {
    pub login_result: Result<String, AuthError>,
    pub register_result: Result<String, AuthError>,
    pub logged_in: bool,
    pub login_calls: Mutex<Vec<(String, String)>>,
    pub register_calls: Mutex<Vec<(String, String, String)>>,
    pub logout_calls: Mutex<Vec<String>>,
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self {
            login_result: Err(AuthError::InvalidCredentials),
            register_result: Err(AuthError::DuplicateAccount),
            logged_in: false,
            login_calls: Mutex::new(Vec::new()),
            register_calls: Mutex::new(Vec::new()),
            logout_calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubAuthenticator {
    pub fn logging_in_as(session_id: &str) -> Self {
        Self {
            login_result: Ok(session_id.to_string()),
            ..Self::default()
        }
    }

    pub fn login_count(&self) -> usize {
        self.login_calls.lock().unwrap().len()
    }
}

impl Authenticator for StubAuthenticator {
    fn login(&self, account: &str, password: &str) -> Result<String, AuthError> {
        self.login_calls
            .lock()
            .unwrap()
            .push((account.to_string(), password.to_string()));
        self.login_result.clone()
    }

    fn register(&self, account: &str, password: &str, email: &str) -> Result<String, AuthError> {
        self.register_calls
            .lock()
            .unwrap()
            .push((account.to_string(), password.to_string(), email.to_string()));
        self.register_result.clone()
    }

    fn is_logged_in(&self, _session_id: Option<&str>) -> bool {
        self.logged_in
    }

    fn logout(&self, session_id: &str) -> bool {
        self.logout_calls.lock().unwrap().push(session_id.to_string());
        true
    }
}
