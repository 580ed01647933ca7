use std::sync::Arc;

use super::{Controller, Dispatch, INDEX_PAGE};
use crate::auth::Authenticator;
use crate::http::cookie::JSESSIONID;
use crate::http::request::{Method, Request};
use crate::http::response::{HttpHeader, Response, ResponseError, StatusCode};

pub const LOGOUT_PATH: &str = "/logout";

/// Ends the caller's session, if any, and redirects to the index.
pub struct LogoutController {
    auth: Arc<dyn Authenticator>,
}

impl LogoutController {
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self { auth }
    }
}

impl Controller for LogoutController {
    fn service(
        &self,
        request: &dyn Request,
        response: &mut dyn Response,
    ) -> Result<Dispatch, ResponseError> {
        if !request.consists_of(Method::POST, LOGOUT_PATH)
            && !request.consists_of(Method::GET, LOGOUT_PATH)
        {
            return Ok(Dispatch::Skipped);
        }

        response.set_response_redirect(StatusCode::Found, INDEX_PAGE)?;

        if let Some(session_id) = request.session_id() {
            self.auth.logout(session_id);
            response.set_response_header(
                HttpHeader::SetCookie,
                &format!("{JSESSIONID}=; Max-Age=0"),
            );
        }

        Ok(Dispatch::Handled)
    }
}
