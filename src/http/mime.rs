//! MIME type table
//!
//! Fixed mapping from file extension to Content-Type. Extensions not in the
//! table are rejected before any filesystem access, so the server never
//! serves arbitrary file types.

/// Content-Type used for extensionless URLs and error bodies.
pub const HTML: &str = "text/html";

/// Look up the Content-Type for a file extension (no leading dot).
///
/// Lookup is case-insensitive: the extension is lowercased first, so
/// `/PHOTO.JPG` resolves the same as `/photo.jpg`. `lookup("css")` yields
/// `Some("text/css")`; an extension outside the table, such as `exe`,
/// yields `None`.
pub fn lookup(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "html" => Some(HTML),
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "json" => Some("application/json"),
        "xml" => Some("application/xml"),
        "wasm" => Some("application/wasm"),
        _ => None,
    }
}
