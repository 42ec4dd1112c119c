//! HTTP server configuration object and helpers.

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Default content directory for uploaded photos, relative to the working
/// directory.
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    port: u16,
    uploads_dir: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(port: u16, uploads_dir: PathBuf) -> Self {
        Self { port, uploads_dir }
    }

    /// Build the configuration from the environment: `PORT` selects the
    /// listen port and `UPLOADS_DIR` the photo directory, each with a
    /// default when unset. An unparseable `PORT` falls back to the default
    /// with a warning rather than refusing to start.
    #[must_use]
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "PORT is not a valid port number");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR));
        Self::new(port, uploads_dir)
    }

    /// Return the port the server will bind to.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the content directory for uploaded photos.
    #[must_use]
    pub fn uploads_dir(&self) -> &Path {
        self.uploads_dir.as_path()
    }
}
