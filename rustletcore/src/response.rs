//! Response handle passed to `Servlet::service`.
//!
//! Wraps an output stream supplied by the container together with the
//! content-type metadata a servlet may set before writing. The stream is
//! borrowed, not owned: the container stays in control of where the bytes
//! go (an in-memory buffer in the embedding, anything `io::Write` in
//! tests).
//!
use std::io::Write;

/// Response handle for a single request
pub struct ServletResponse<'a> {
    /// Content type set by the servlet, if any
    content_type: Option<String>,
    /// Output stream supplied by the container
    writer: &'a mut dyn Write,
}

impl<'a> ServletResponse<'a> {
    /// Wrap a container-supplied output stream
    pub fn new(writer: &'a mut dyn Write) -> Self {
        Self {
            content_type: None,
            writer,
        }
    }

    /// Set the content type for this response; the last call wins
    pub fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    /// Content type most recently set, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Output stream for the response body
    pub fn writer(&mut self) -> &mut dyn Write {
        &mut *self.writer
    }
}
