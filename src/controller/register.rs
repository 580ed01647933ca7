use std::sync::Arc;

use tracing::debug;

use super::{Controller, Dispatch, UNAUTHORIZED_PAGE, redirect_with_session};
use crate::auth::Authenticator;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseError, StatusCode};

pub const REGISTER_PATH: &str = "/register";
pub const REGISTER_PAGE: &str = "/register.html";

/// Handles `GET /register` (the form) and `POST /register` (account creation).
///
/// A taken account name is answered like a failed login.
pub struct RegisterController {
    auth: Arc<dyn Authenticator>,
}

impl RegisterController {
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self { auth }
    }
}

impl Controller for RegisterController {
    fn service(
        &self,
        request: &dyn Request,
        response: &mut dyn Response,
    ) -> Result<Dispatch, ResponseError> {
        if request.consists_of(Method::GET, REGISTER_PATH) {
            response.set_response_resource(StatusCode::Ok, REGISTER_PAGE)?;
            return Ok(Dispatch::Handled);
        }

        if !request.consists_of(Method::POST, REGISTER_PATH) {
            return Ok(Dispatch::Skipped);
        }

        let account = request.form_parameter("account").unwrap_or_default();
        let password = request.form_parameter("password").unwrap_or_default();
        let email = request.form_parameter("email").unwrap_or_default();

        match self.auth.register(&account, &password, &email) {
            Ok(session_id) => redirect_with_session(response, &session_id)?,
            Err(e) => {
                debug!(account = %account, "Registration failed: {}", e);
                response.set_response_resource(StatusCode::Unauthorized, UNAUTHORIZED_PAGE)?;
            }
        }

        Ok(Dispatch::Handled)
    }
}
