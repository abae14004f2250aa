//! Servlet configuration handle.
//!
//! A `ServletConfig` is created by the container for each servlet it
//! manages and handed over exactly once through `Servlet::init`. It carries
//! the name the servlet is registered under plus a set of string init
//! parameters; servlets treat it as an opaque handle and only read it back.
//!
use std::collections::HashMap;

/// Configuration handle supplied by the container at initialization
#[derive(Debug, Clone)]
pub struct ServletConfig {
    /// Name the servlet is registered under
    name: String,
    /// Init parameters filled in by the container
    init_parameters: HashMap<String, String>,
}

impl ServletConfig {
    /// Create a configuration handle for the servlet registered as `name`
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            init_parameters: HashMap::new(),
        }
    }

    /// Add one init parameter, chainable on the container side
    pub fn with_init_parameter(mut self, name: &str, value: &str) -> Self {
        self.init_parameters
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Name the servlet was registered under
    pub fn servlet_name(&self) -> &str {
        &self.name
    }

    /// Look up one init parameter by name
    pub fn init_parameter(&self, name: &str) -> Option<&str> {
        self.init_parameters.get(name).map(String::as_str)
    }
}
