//! The servlet lifecycle trait.
//!
//! Re-expresses the container-driven lifecycle as one capability set: a
//! container initializes a servlet exactly once, services any number of
//! requests through it, and finally destroys it. The implementations live
//! with the container embedding; nothing is shared between them beyond
//! this trait.
//!
use crate::config::ServletConfig;
use crate::error::ServletError;
use crate::request::ServletRequest;
use crate::response::ServletResponse;

/// Container-managed request handler.
///
/// Lifecycle: uninitialized, then `init` once, then `service` any number of
/// times, then `destroy` once. The container drives every transition; a
/// servlet never calls these methods on itself.
pub trait Servlet {
    /// Store the configuration handle supplied by the container.
    ///
    /// Called once before any request is serviced.
    fn init(&mut self, config: ServletConfig) -> Result<(), ServletError>;

    /// Configuration handle stored at init, `None` while uninitialized
    fn config(&self) -> Option<&ServletConfig>;

    /// Handle one request by writing to the response.
    ///
    /// Takes `&self` because the container may service many requests
    /// concurrently after the single initialization.
    fn service(
        &self,
        request: &ServletRequest,
        response: &mut ServletResponse<'_>,
    ) -> Result<(), ServletError>;

    /// Release the servlet; called once when it is taken out of service
    fn destroy(&mut self);

    /// Short human-readable description of the servlet
    fn info(&self) -> &str {
        ""
    }
}
