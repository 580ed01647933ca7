mod common;

use std::sync::Arc;

use common::{Call, FakeRequest, RecordingResponse, StubAuthenticator};
use coyote::controller::{Controller, Dispatch, LogoutController, RegisterController};
use coyote::http::request::Method;
use coyote::http::response::{HttpHeader, StatusCode};

#[test]
fn test_get_register_serves_form() {
    let controller = RegisterController::new(Arc::new(StubAuthenticator::default()));
    let mut response = RecordingResponse::default();

    let dispatch = controller
        .service(&FakeRequest::new(Method::GET, "/register"), &mut response)
        .unwrap();

    assert_eq!(dispatch, Dispatch::Handled);
    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Ok, "/register.html".to_string())]
    );
}

#[test]
fn test_post_register_success_redirects_then_sets_cookie() {
    let auth = Arc::new(StubAuthenticator {
        register_result: Ok("fresh".to_string()),
        ..StubAuthenticator::default()
    });
    let controller = RegisterController::new(auth.clone());
    let request = FakeRequest::new(Method::POST, "/register")
        .form("account", "account")
        .form("password", "password")
        .form("email", "account@email.com");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(
        *auth.register_calls.lock().unwrap(),
        vec![(
            "account".to_string(),
            "password".to_string(),
            "account@email.com".to_string()
        )]
    );
    assert_eq!(
        response.calls,
        vec![
            Call::Redirect(StatusCode::Found, "/index.html".to_string()),
            Call::Header(HttpHeader::SetCookie, "JSESSIONID=fresh".to_string()),
        ]
    );
}

#[test]
fn test_post_register_duplicate_serves_unauthorized_page() {
    let controller = RegisterController::new(Arc::new(StubAuthenticator::default()));
    let request = FakeRequest::new(Method::POST, "/register").form("account", "gugu");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(
        response.calls,
        vec![Call::Resource(StatusCode::Unauthorized, "/401.html".to_string())]
    );
}

#[test]
fn test_register_skips_other_routes() {
    let controller = RegisterController::new(Arc::new(StubAuthenticator::default()));
    let mut response = RecordingResponse::default();

    let dispatch = controller
        .service(&FakeRequest::new(Method::POST, "/login"), &mut response)
        .unwrap();

    assert_eq!(dispatch, Dispatch::Skipped);
    assert!(response.calls.is_empty());
}

#[test]
fn test_logout_removes_session_and_clears_cookie() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LogoutController::new(auth.clone());
    let request = FakeRequest::new(Method::POST, "/logout").session("abc");
    let mut response = RecordingResponse::default();

    controller.service(&request, &mut response).unwrap();

    assert_eq!(*auth.logout_calls.lock().unwrap(), vec!["abc".to_string()]);
    assert_eq!(
        response.calls,
        vec![
            Call::Redirect(StatusCode::Found, "/index.html".to_string()),
            Call::Header(HttpHeader::SetCookie, "JSESSIONID=; Max-Age=0".to_string()),
        ]
    );
}

#[test]
fn test_logout_without_session_only_redirects() {
    let auth = Arc::new(StubAuthenticator::default());
    let controller = LogoutController::new(auth.clone());
    let mut response = RecordingResponse::default();

    controller
        .service(&FakeRequest::new(Method::GET, "/logout"), &mut response)
        .unwrap();

    assert!(auth.logout_calls.lock().unwrap().is_empty());
    assert_eq!(
        response.calls,
        vec![Call::Redirect(StatusCode::Found, "/index.html".to_string())]
    );
}
