//! Shared protocol types for the Poseidon file-manager plugin API
//!
//! Defines the JSON bodies exchanged with the service and the endpoints
//! they are posted to.

pub mod messages;
pub mod operation;

pub use messages::*;
pub use operation::*;

/// Host the file-manager service listens on by default
pub const DEFAULT_BASE_URL: &str = "http://localhost:2014";
