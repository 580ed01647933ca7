//! Coyote - a small HTTP/1.1 server with cookie-backed login sessions.
//!
//! Core library: request/response model, session registry, authentication
//! and the controllers that tie them together.

pub mod auth;
pub mod config;
pub mod controller;
pub mod http;
pub mod server;
pub mod session;
