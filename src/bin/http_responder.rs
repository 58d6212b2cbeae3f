//! Plain HTTP responder.
//!
//! Answers every request with a fixed string over unencrypted HTTP. Listens
//! on port 8080, or 2020 when the flag argument is present.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::config::{select_port, DEFAULT_LOG_FILTER};
use responder::http::serve_plain;
use responder::responder::html_responder;

/// Answer every HTTP request with a fixed string
#[derive(Parser, Debug)]
#[command(name = "http-responder", version, about)]
struct Args {
    /// Response body sent for every request
    body: String,

    /// Listen on port 2020 instead of 8080 when present and non-empty
    alt_port_flag: Option<String>,

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

    let port = select_port(args.alt_port_flag.as_deref());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, body_len = args.body.len(), "Starting plain responder");

    serve_plain(html_responder(args.body), addr).await?;

    Ok(())
}
