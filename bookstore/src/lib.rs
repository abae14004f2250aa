//! Bookstore model crate.
//!
//! Holds the `Book` record used by the bookstore teaching material. The
//! record is a standalone value type: nothing else in the workspace links
//! against it at runtime, and no persistence or serialization format is
//! wired up here (the serde derives are for downstream use).
//!
/// Book record module
pub mod book;
