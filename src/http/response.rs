//! HTTP response building module
//!
//! Builders for the two responses this server produces: a 200 carrying file
//! bytes, and the uniform 404 every failure collapses into.

use crate::http::mime;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Fixed body for every not-found outcome, regardless of cause.
const NOT_FOUND_BODY: &str = "404: File not found";

/// Build 404 Not Found response
///
/// Unsupported extension, traversal attempt, missing file, and unreadable
/// file all produce this exact response, so the cause never leaks to the
/// client.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", mime::HTML)
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Build 200 response with file content
pub fn build_file_response(data: Bytes, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
