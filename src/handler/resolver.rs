//! Request path resolution
//!
//! Maps an untrusted request path to a file beneath the site root, or to a
//! uniform not-found outcome. This is the only part of the server with real
//! correctness hazards: directory traversal must be impossible, and
//! extensionless URLs follow a fixed HTML fallback order.

use crate::http::mime;
use crate::logger;
use std::path::{Path, PathBuf};

/// Outcome of resolving a request path.
///
/// Every failure mode (unsupported extension, traversal attempt, missing or
/// unreadable file) collapses into `NotFound`; there is no separate error
/// channel, so no filesystem detail can leak into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    ServeFile {
        path: PathBuf,
        content_type: &'static str,
    },
    NotFound,
}

/// Resolve an untrusted URL path to a file under `root`.
///
/// `root` must be canonical (see `AppState::new`). Resolution order:
///
/// 1. Extract the extension from the last path segment and gate on the MIME
///    table. Unknown extensions are rejected before touching the filesystem.
/// 2. Pick the candidate file: `/` maps to `index.html`; a path with an
///    extension maps to itself; an extensionless path tries `path.html`
///    first, then falls back to `path/index.html`.
/// 3. Canonicalize the joined path and require it to stay under `root`,
///    compared per path segment so a sibling like `public-evil` cannot pass
///    for a root of `public`. Canonicalization also resolves symlinks, so a
///    link pointing outside the root is caught here too.
///
/// The existence probe in step 2 races with the eventual read; a file
/// created or removed in between yields at worst a transient 404. That race
/// is accepted rather than closed with file-descriptor juggling. The probe
/// also runs before the containment check, so a traversal path can test the
/// existence of a file outside the root; nothing outside the root is ever
/// served, since step 3 still rejects the candidate.
pub fn resolve(root: &Path, url_path: &str) -> Resolution {
    let extension = extension_of(url_path);

    let content_type = match extension {
        Some(ext) => match mime::lookup(ext) {
            Some(ct) => ct,
            None => return Resolution::NotFound,
        },
        None => mime::HTML,
    };

    let relative = url_path.trim_start_matches('/');
    let candidate: PathBuf = if url_path == "/" {
        PathBuf::from("index.html")
    } else if extension.is_some() {
        PathBuf::from(relative)
    } else {
        let with_html = format!("{relative}.html");
        if root.join(&with_html).is_file() {
            PathBuf::from(with_html)
        } else {
            Path::new(relative).join("index.html")
        }
    };

    // Canonicalization fails for anything that does not exist, which folds
    // the missing-file case into NotFound before the containment check.
    let Ok(resolved) = root.join(candidate).canonicalize() else {
        return Resolution::NotFound;
    };

    if !resolved.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {url_path} -> {}",
            resolved.display()
        ));
        return Resolution::NotFound;
    }

    Resolution::ServeFile {
        path: resolved,
        content_type,
    }
}

/// Extract the extension from the last segment of a URL path.
///
/// Matches Node's `extname` semantics: the text after the last dot, unless
/// the dot starts the segment (`.env` has no extension) or ends it
/// (`about.` has an empty one, treated as none).
fn extension_of(url_path: &str) -> Option<&str> {
    let segment = url_path.rsplit('/').next().unwrap_or(url_path);
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
