//! Rustlet lifecycle contract crate.
//!
//! This crate contains the pieces the servlet variants and the container
//! embedding agree on: the `Servlet` lifecycle trait, the configuration
//! handle passed at initialization, the request/response abstractions, and
//! the contract's error type. These modules are intentionally minimal and
//! focus on the container contract rather than being a general web
//! framework.
//!
/// Configuration handle supplied at initialization
pub mod config;
/// Contract error types
pub mod error;
/// Request abstraction
pub mod request;
/// Response abstraction
pub mod response;
/// Servlet lifecycle trait
pub mod servlet;
