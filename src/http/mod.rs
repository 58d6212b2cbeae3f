//! HTTP/HTTPS server module.
//!
//! Serves a router over plain HTTP or over TLS with user-provided
//! certificate material. Both entry points block until the server exits.

mod server;

pub use server::{serve_plain, serve_tls, ServerError};
