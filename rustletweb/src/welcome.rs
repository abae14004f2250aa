//! The templated servlet: one fixed HTML page per request.
//!
//! Same externally observable contract shape as `hello`; the trivial
//! configuration storage is duplicated here rather than shared.
//!
use std::io::Write;

use rustletcore::{
    config::ServletConfig, error::ServletError, request::ServletRequest,
    response::ServletResponse, servlet::Servlet,
};

use crate::html::WELCOME_PAGE;

/// Servlet answering every request with the static welcome page
pub struct WelcomeServlet {
    /// Configuration handle stored at init
    config: Option<ServletConfig>,
}

impl WelcomeServlet {
    /// Create an uninitialized servlet; the container calls `init` next
    pub fn new() -> Self {
        Self { config: None }
    }
}

impl Servlet for WelcomeServlet {
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
        response.set_content_type("text/html");
        response.writer().write_all(WELCOME_PAGE.as_bytes())?;
        Ok(())
    }

    fn destroy(&mut self) {
        // nothing to release
    }
}
