//! Fixed-body HTTP and HTTPS responders.
//!
//! Two small binaries that answer every inbound request with a command-line
//! supplied string: `http-responder` over plain HTTP, `https-responder` over
//! TLS. Used as endpoints in network test rigs where the response body
//! identifies which backend answered.

pub mod config;
pub mod http;
pub mod responder;
pub mod tls;
