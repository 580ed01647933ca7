mod common;

use std::sync::Arc;

use common::{Call, FakeRequest, RecordingResponse, StubAuthenticator};
use coyote::controller::{Controller, Dispatch, LoginController};
use coyote::http::request::Method;
use coyote::http::response::{HttpHeader, StatusCode};

fn redirect_to_index() -> Call {
    Call::Redirect(StatusCode::Found, "/index.html".to_string())
}

fn session_cookie(id: &str) -> Call {
    Call::Header(HttpHeader::SetCookie, format!("JSESSIONID={id}"))
}

#[test]
fn test_post_login_success_redirects_then_sets_cookie() {
    let auth = Arc::new(StubAuthenticator::logging_in_as("sessionId"));
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::POST, "/login")
        .form("account", "gugu")
        .form("password", "password");
    let mut response = RecordingResponse::default();

    let dispatch = controller.service(&request, &mut response).unwrap();

    assert_eq!(dispatch, Dispatch::Handled);
    assert_eq!(auth.login_count(), 1);
    assert_eq!(
        *auth.login_calls.lock().unwrap(),
        vec![("gugu".to_string(), "password".to_string())]
    );
    // Redirect must be recorded before the cookie
    assert_eq!(response.calls, vec![redirect_to_index(), session_cookie("sessionId")]);
}

#[test]
fn test_post_login_failure_serves_unauthorized_page() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::POST, "/login");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(auth.login_count(), 1);
    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Unauthorized, "/401.html".to_string())]
    );
}

#[test]
fn test_get_login_with_query_string_logs_in() {
    let auth = Arc::new(StubAuthenticator::logging_in_as("sessionId"));
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::GET, "/login")
        .query("account", "gugu")
        .query("password", "password");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(
        *auth.login_calls.lock().unwrap(),
        vec![("gugu".to_string(), "password".to_string())]
    );
    assert_eq!(response.calls, vec![redirect_to_index(), session_cookie("sessionId")]);
}

#[test]
fn test_get_login_with_query_string_failure_serves_unauthorized_page() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::GET, "/login").query("account", "nobody");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(auth.login_count(), 1);
    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Unauthorized, "/401.html".to_string())]
    );
}

#[test]
fn test_get_login_when_already_logged_in_redirects_without_cookie() {
    let auth = Arc::new(StubAuthenticator {
        logged_in: true,
        ..StubAuthenticator::default()
    });
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::GET, "/login").session("existing");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(auth.login_count(), 0);
    assert_eq!(response.calls, vec![redirect_to_index()]);
}

#[test]
fn test_get_login_with_stale_session_serves_login_page() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LoginController::new(auth);
    let request = FakeRequest::new(Method::GET, "/login").session("expired");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Ok, "/login.html".to_string())]
    );
}

#[test]
fn test_get_login_serves_login_page() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LoginController::new(auth.clone());
    let request = FakeRequest::new(Method::GET, "/login");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(auth.login_count(), 0);
    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Ok, "/login.html".to_string())]
    );
}

#[test]
fn test_other_routes_are_skipped() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LoginController::new(auth);
    let mut response = RecordingResponse::default();

    for request in [
        FakeRequest::new(Method::GET, "/login/"),
        FakeRequest::new(Method::PUT, "/login"),
        FakeRequest::new(Method::GET, "/index.html"),
    ] {
        let dispatch = controller.service(&request, &mut response).unwrap();
        assert_eq!(dispatch, Dispatch::Skipped);
    }

    assert!(response.calls.is_empty());
}
