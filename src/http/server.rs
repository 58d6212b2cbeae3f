//! HTTP/HTTPS server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;

use crate::tls::CertMaterial;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Serve the router over plain HTTP.
///
/// This function blocks until the server shuts down. A bind failure, such
/// as the port already being in use, surfaces as [`ServerError::Server`].
pub async fn serve_plain(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Serve the router over TLS using in-memory certificate material.
///
/// The PEM material is parsed before binding; rejected material is fatal.
/// Handshake failures from individual clients are handled per-connection by
/// the TLS acceptor and never reach this function.
pub async fn serve_tls(
    app: Router,
    addr: SocketAddr,
    certs: CertMaterial,
) -> Result<(), ServerError> {
    let rustls_config = RustlsConfig::from_pem(certs.cert, certs.key)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    tracing::info!(%addr, "Starting HTTPS server");

    axum_server::bind_rustls(addr, rustls_config)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
