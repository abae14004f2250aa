//! The minimal servlet: one plain-text line per request.
//!
//! Implements the full lifecycle contract itself, configuration storage
//! included. The response is the same for every request; nothing in the
//! request is examined.
//!
use std::io::Write;

use rustletcore::{
    config::ServletConfig, error::ServletError, request::ServletRequest,
    response::ServletResponse, servlet::Servlet,
};

/// Servlet answering every request with a fixed plain-text greeting
pub struct HelloServlet {
    /// Configuration handle stored at init
    config: Option<ServletConfig>,
}

impl HelloServlet {
    /// Create an uninitialized servlet; the container calls `init` next
    pub fn new() -> Self {
        Self { config: None }
    }
}

impl Servlet for HelloServlet {
    fn init(&mut self, config: ServletConfig) -> Result<(), ServletError> {
        self.config = Some(config);
        Ok(())
    }

    fn config(&self) -> Option<&ServletConfig> {
        self.config.as_ref()
    }

    fn service(
        &self,
        _request: &ServletRequest,
        response: &mut ServletResponse<'_>,
    ) -> Result<(), ServletError> {
        response.set_content_type("text/plain");
        let out = response.writer();
        writeln!(out, "Hello, World!")?;
        Ok(())
    }

    fn destroy(&mut self) {
        // nothing to release
    }

    fn info(&self) -> &str {
        "HelloServlet"
    }
}
