use std::sync::Arc;

use tracing::debug;

use super::{Controller, Dispatch, INDEX_PAGE, UNAUTHORIZED_PAGE, redirect_with_session};
use crate::auth::Authenticator;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseError, StatusCode};

pub const LOGIN_PATH: &str = "/login";
pub const LOGIN_PAGE: &str = "/login.html";

/// Handles `GET /login` and `POST /login`.
///
/// - `POST` reads `account` and `password` from the form body.
/// - `GET` with a query string reads them from the query instead.
/// - `GET` from a browser that is already logged in goes straight to the index.
/// - Any other `GET` gets the login page.
///
/// A successful login redirects to the index and sets the session cookie, in
/// that order. Rejected credentials get `401` with the unauthorized page.
pub struct LoginController {
    auth: Arc<dyn Authenticator>,
}

impl LoginController {
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self { auth }
    }

    fn login(
        &self,
        account: &str,
        password: &str,
        response: &mut dyn Response,
    ) -> Result<(), ResponseError> {
        match self.auth.login(account, password) {
            Ok(session_id) => redirect_with_session(response, &session_id),
            Err(e) => {
                debug!(account = %account, "Login failed: {}", e);
                response.set_response_resource(StatusCode::Unauthorized, UNAUTHORIZED_PAGE)
            }
        }
    }
}

impl Controller for LoginController {
    fn service(
        &self,
        request: &dyn Request,
        response: &mut dyn Response,
    ) -> Result<Dispatch, ResponseError> {
        if request.consists_of(Method::POST, LOGIN_PATH) {
            let account = request.form_parameter("account").unwrap_or_default();
            let password = request.form_parameter("password").unwrap_or_default();
            self.login(&account, &password, response)?;
            return Ok(Dispatch::Handled);
        }

        if request.consists_of(Method::GET, LOGIN_PATH) {
            if request.has_query_string() {
                let account = request.query_parameter("account").unwrap_or_default();
                let password = request.query_parameter("password").unwrap_or_default();
                self.login(account, password, response)?;
            } else if request.has_session_id() && self.auth.is_logged_in(request.session_id()) {
                response.set_response_redirect(StatusCode::Found, INDEX_PAGE)?;
            } else {
                response.set_response_resource(StatusCode::Ok, LOGIN_PAGE)?;
            }
            return Ok(Dispatch::Handled);
        }

        Ok(Dispatch::Skipped)
    }
}
