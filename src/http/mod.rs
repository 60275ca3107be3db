//! HTTP protocol layer module
//!
//! Response building helpers, decoupled from the endpoint business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_413_response, build_options_response, internal_error, json_response, not_found,
};
