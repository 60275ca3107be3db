//! Request handler module
//!
//! Routing dispatch plus the endpoint handlers behind it.

pub mod endpoints;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
