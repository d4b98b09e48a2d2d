//! HTTP protocol layer module
//!
//! MIME table and response builders, decoupled from request handling.

pub mod mime;
pub mod response;

pub use response::{build_404_response, build_file_response};
