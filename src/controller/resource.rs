use super::{Controller, Dispatch};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseError, StatusCode};

/// Catch-all for `GET` and `HEAD` requests: the root greeting and static
/// pages. A `HEAD` response is built like `GET`; the writer drops the body.
///
/// A path without an extension is taken to mean the `.html` page of that
/// name, so `/index` serves `/index.html`.
#[derive(Debug, Default)]
pub struct ResourceController;

impl ResourceController {
    pub fn new() -> Self {
        Self
    }
}

/// Maps a request path to the resource that backs it.
pub fn resource_path(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or("");
    if file_name.is_empty() {
        format!("{path}index.html")
    } else if file_name.contains('.') {
        path.to_string()
    } else {
        format!("{path}.html")
    }
}

impl Controller for ResourceController {
    fn service(
        &self,
        request: &dyn Request,
        response: &mut dyn Response,
    ) -> Result<Dispatch, ResponseError> {
        if !matches!(request.method(), Method::GET | Method::HEAD) {
            return Ok(Dispatch::Skipped);
        }

        if request.path() == "/" {
            response.set_response_body(
                StatusCode::Ok,
                "text/html;charset=utf-8",
                b"Hello world!".to_vec(),
            )?;
            return Ok(Dispatch::Handled);
        }

        response.set_response_resource(StatusCode::Ok, &resource_path(request.path()))?;
        Ok(Dispatch::Handled)
    }
}
