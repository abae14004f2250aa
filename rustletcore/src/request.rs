//! Request abstraction passed to `Servlet::service`.
//!
//! Deliberately thin: the servlets in this workspace ignore the request
//! entirely and answer the same way for any input. Method and path are
//! carried so the container can hand over what it knows.
//!
/// One incoming request as seen by a servlet
#[derive(Debug, Clone, Default)]
pub struct ServletRequest {
    /// HTTP method as reported by the container
    pub method: String,
    /// Request path as reported by the container
    pub path: String,
}

impl ServletRequest {
    /// Build a request handle from what the container knows
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}
