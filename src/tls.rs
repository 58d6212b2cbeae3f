//! Certificate material loading.
//!
//! The certificate and private key are read fully into memory once at
//! startup, before the listener binds, and are never reloaded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CERT_FILE, KEY_FILE};

/// Certificate loading error
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// PEM-encoded certificate chain and private key.
///
/// Immutable after loading; handed to the server by value.
#[derive(Debug)]
pub struct CertMaterial {
    pub cert: Vec<u8>,
    pub key: Vec<u8>,
}

impl CertMaterial {
    /// Read `server.crt` and `server.key` from the given directory.
    ///
    /// A missing or unreadable file is fatal to the caller; no listener
    /// should be bound before this succeeds.
    pub fn load(dir: &Path) -> Result<Self, TlsError> {
        let cert = read_file(dir.join(CERT_FILE))?;
        let key = read_file(dir.join(KEY_FILE))?;
        Ok(Self { cert, key })
    }
}

fn read_file(path: PathBuf) -> Result<Vec<u8>, TlsError> {
    fs::read(&path).map_err(|source| TlsError::Read { path, source })
}
