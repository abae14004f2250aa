//! rustletweb crate entrypoint.
//!
//! Starts the Tokio runtime and launches the container embedding defined
//! in the `server` module. Keep this file minimal; the embedding lives in
//! `server` and `config`, the servlets in `hello` and `welcome`.
//!
/// Container embedding and request forwarding
mod server;
/// Configuration management and settings
mod config;
/// Static HTML content
mod html;
/// Minimal plain-text servlet
mod hello;
/// Templated HTML servlet
mod welcome;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    server::run().await;
}
