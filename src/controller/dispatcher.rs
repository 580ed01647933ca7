use std::sync::Arc;

use tracing::{debug, error};

use super::{
    Controller, Dispatch, LoginController, LogoutController, NOT_FOUND_PAGE, RegisterController,
    ResourceController,
};
use crate::auth::Authenticator;
use crate::http::request::Request;
use crate::http::response::{HttpResponse, Response, StatusCode};

/// Routes a request to the first controller that handles it.
pub struct Dispatcher {
    controllers: Vec<Box<dyn Controller>>,
}

impl Dispatcher {
    /// Dispatcher with no routes; every request is answered with `404`.
    pub fn empty() -> Self {
        Self {
            controllers: Vec::new(),
        }
    }

    /// The standard routes: login, register, logout, then static resources.
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self::empty()
            .route(LoginController::new(auth.clone()))
            .route(RegisterController::new(auth.clone()))
            .route(LogoutController::new(auth))
            .route(ResourceController::new())
    }

    /// Appends a controller; earlier controllers take precedence.
    pub fn route(mut self, controller: impl Controller + 'static) -> Self {
        self.controllers.push(Box::new(controller));
        self
    }

    pub fn dispatch(&self, request: &dyn Request) -> HttpResponse {
        let mut response = HttpResponse::new();

        for controller in &self.controllers {
            match controller.service(request, &mut response) {
                Ok(Dispatch::Handled) => {
                    debug!(
                        method = ?request.method(),
                        path = %request.path(),
                        status = response.status().as_u16(),
                        "Request handled"
                    );
                    return response;
                }
                Ok(Dispatch::Skipped) => continue,
                Err(e) => {
                    error!(
                        method = ?request.method(),
                        path = %request.path(),
                        error = %e,
                        "Controller produced an inconsistent response"
                    );
                    return HttpResponse::plain(StatusCode::InternalServerError);
                }
            }
        }

        let mut response = HttpResponse::new();
        if let Err(e) = response.set_response_resource(StatusCode::NotFound, NOT_FOUND_PAGE) {
            error!(error = %e, "Failed to build not-found response");
            return HttpResponse::plain(StatusCode::NotFound);
        }
        response
    }
}
