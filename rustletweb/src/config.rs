//! Configuration loader and defaults for the rustletweb container.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults): the listen port
//! (`RUSTLET_PORT`) and bind address (`RUSTLET_BIND`). This is process
//! configuration for the embedding; the per-servlet `ServletConfig`
//! handles are built in `server` and are unrelated.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default HTTP port, the conventional servlet-container port
const DEFAULT_PORT: u16 = 8080;

/// Default bind address
const DEFAULT_BIND: &str = "0.0.0.0";

/// Process configuration for the container embedding
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Bind address for the listener
    pub bind: String,
}

/// Global configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("RUSTLET_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),

    bind: env::var("RUSTLET_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
});
