//! Request handlers bound to a method and path.
//!
//! Each [`Controller`] inspects a request through the [`Request`] trait and
//! records its decision on a [`Response`]. The [`Dispatcher`] offers a request
//! to each controller in turn until one handles it.

pub mod dispatcher;
pub mod login;
pub mod logout;
pub mod register;
pub mod resource;

pub use dispatcher::Dispatcher;
pub use login::LoginController;
pub use logout::LogoutController;
pub use register::RegisterController;
pub use resource::ResourceController;

use crate::http::cookie::session_cookie;
use crate::http::request::Request;
use crate::http::response::{HttpHeader, Response, ResponseError, StatusCode};

/// Landing page after a successful login or registration.
pub const INDEX_PAGE: &str = "/index.html";
/// Page served for rejected credentials.
pub const UNAUTHORIZED_PAGE: &str = "/401.html";
/// Page served for requests nothing else handles.
pub const NOT_FOUND_PAGE: &str = "/404.html";

/// Whether a controller took responsibility for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// Not this controller's route; the request goes elsewhere.
    Skipped,
}

pub trait Controller: Send + Sync {
    fn service(
        &self,
        request: &dyn Request,
        response: &mut dyn Response,
    ) -> Result<Dispatch, ResponseError>;
}

/// Redirects to the index page and hands the new session to the browser.
///
/// The redirect is recorded before the cookie header.
fn redirect_with_session(
    response: &mut dyn Response,
    session_id: &str,
) -> Result<(), ResponseError> {
    response.set_response_redirect(StatusCode::Found, INDEX_PAGE)?;
    response.set_response_header(HttpHeader::SetCookie, &session_cookie(session_id));
    Ok(())
}
