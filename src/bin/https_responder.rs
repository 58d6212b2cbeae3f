//! TLS responder.
//!
//! Answers every request with a fixed string over HTTPS on port 8080. The
//! certificate and key are read from `<certdir>/server.crt` and
//! `<certdir>/server.key` before the listener binds; the certificate
//! directory defaults to the current working directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::config::{DEFAULT_LOG_FILTER, DEFAULT_PORT};
use responder::http::serve_tls;
use responder::responder::bare_responder;
use responder::tls::CertMaterial;

/// Answer every HTTPS request with a fixed string
#[derive(Parser, Debug)]
#[command(name = "https-responder", version, about)]
struct Args {
    /// Response body sent for every request
    body: String,

    /// Directory containing server.crt and server.key
    #[arg(default_value = ".")]
    cert_dir: PathBuf,

    /// Log level filter (e.g., "responder=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let certs = CertMaterial::load(&args.cert_dir)?;
    tracing::info!(dir = %args.cert_dir.display(), "Loaded certificate and key");

    let addr = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));

    // Startup diagnostic on stdout, independent of the log filter
    println!("Server listening on https://localhost:{}/", DEFAULT_PORT);

    serve_tls(bare_responder(args.body), addr, certs).await?;

    Ok(())
}
