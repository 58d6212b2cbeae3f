//! Constants and port selection.
//!
//! Both responders default to port 8080. The plain responder switches to the
//! alternate port when its flag argument is present; the secure responder
//! always binds the default port.

/// Default listening port for both responders
pub const DEFAULT_PORT: u16 = 8080;

/// Alternate port used by the plain responder when the flag argument is set
pub const ALT_PORT: u16 = 2020;

/// Certificate file name inside the certificate directory
pub const CERT_FILE: &str = "server.crt";

/// Private key file name inside the certificate directory
pub const KEY_FILE: &str = "server.key";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "responder=info";

/// Pick the plain responder's listening port.
///
/// Any non-empty flag argument selects the alternate port; an absent or
/// empty argument keeps the default.
pub fn select_port(flag: Option<&str>) -> u16 {
    match flag {
        Some(f) if !f.is_empty() => ALT_PORT,
        _ => DEFAULT_PORT,
    }
}
