//! HTTP/1.1 protocol layer.
//!
//! # Architecture
//!
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: the [`Request`](request::Request) view controllers read from, and
//!   its concrete [`HttpRequest`](request::HttpRequest)
//! - **`cookie`**: `Cookie` header parsing and the session cookie
//! - **`response`**: the [`Response`](response::Response) controllers write to, and
//!   its concrete [`HttpResponse`](response::HttpResponse)
//! - **`writer`**: resolves the response body and serializes it to the client
//! - **`mime`**: Content-Type detection based on file extensions
//! - **`connection`**: the per-connection request-response state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch to a controller
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Load resource, send response
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```
//!
//! A request that fails to parse is answered with `400 Bad Request` and the
//! connection is closed.

pub mod connection;
pub mod cookie;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
