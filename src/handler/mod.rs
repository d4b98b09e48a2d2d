//! Request handler module
//!
//! Entry point for HTTP request processing: logs the request, resolves the
//! path to a file, reads it, and builds the response.

pub mod resolver;

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use resolver::Resolution;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::fs;

/// Main entry point for HTTP request handling.
///
/// The method is logged but never consulted for resolution: a `POST
/// /index.html` resolves exactly like a `GET`. Failures of any kind produce
/// the same 404 response. The request body is never read, so any body type
/// works.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    // Uri::path() excludes the query string, so "/app.css?v=2" resolves as
    // "/app.css".
    let path = req.uri().path();

    if state.config.logging.access_log {
        logger::log_request(method, path);
    }

    let response = match resolver::resolve(&state.root, path) {
        Resolution::ServeFile { path, content_type } => match fs::read(&path).await {
            Ok(content) => {
                if state.config.logging.access_log {
                    logger::log_response(content.len());
                }
                http::build_file_response(Bytes::from(content), content_type)
            }
            Err(e) => {
                // Unreadable (e.g. a directory, or permission denied) folds
                // into the same 404 as a missing file.
                logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
                http::build_404_response()
            }
        },
        Resolution::NotFound => http::build_404_response(),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::{BodyExt, Empty};
    use std::fs;
    use std::path::PathBuf;

    /// Throwaway site root plus the state handed to `handle_request`.
    struct ServerFixture {
        base: PathBuf,
        state: Arc<AppState>,
    }

    impl ServerFixture {
        fn new(name: &str) -> Self {
            let base = std::env::temp_dir().join(format!("staticd-{name}-{}", std::process::id()));
            let _ = fs::remove_dir_all(&base);
            fs::create_dir_all(&base).unwrap();

            let config = Config {
                server: crate::config::ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8000,
                    workers: None,
                },
                site: crate::config::SiteConfig {
                    root: base.display().to_string(),
                },
                logging: crate::config::LoggingConfig { access_log: false },
            };
            let state = Arc::new(AppState::new(config).unwrap());

            Self { base, state }
        }

        fn write(&self, rel: &str, contents: &str) {
            let path = self.base.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }

        async fn request(&self, method: &str, path: &str) -> (u16, String, Bytes) {
            let req = Request::builder()
                .method(method)
                .uri(path)
                .body(Empty::<Bytes>::new())
                .unwrap();

            let resp = handle_request(req, Arc::clone(&self.state)).await.unwrap();
            let status = resp.status().as_u16();
            let content_type = resp.headers()["Content-Type"]
                .to_str()
                .unwrap()
                .to_string();
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            (status, content_type, body)
        }
    }

    impl Drop for ServerFixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.base);
        }
    }

    #[tokio::test]
    async fn test_directory_target_yields_uniform_404() {
        // A directory named like a servable file resolves, but the read
        // fails; that failure must fold into the same 404 as a missing file.
        let server = ServerFixture::new("dir-target");
        fs::create_dir_all(server.base.join("weird.png")).unwrap();

        let (status, content_type, body) = server.request("GET", "/weird.png").await;
        assert_eq!(status, 404);
        assert_eq!(content_type, "text/html");
        assert_eq!(&body[..], b"404: File not found");
    }

    #[tokio::test]
    async fn test_method_does_not_affect_resolution() {
        let server = ServerFixture::new("any-method");
        server.write("index.html", "<h1>home</h1>");

        let get = server.request("GET", "/index.html").await;
        assert_eq!(get.0, 200);
        assert_eq!(get.1, "text/html");
        assert_eq!(&get.2[..], b"<h1>home</h1>");

        // POST and DELETE resolve identically to GET
        assert_eq!(server.request("POST", "/index.html").await, get);
        assert_eq!(server.request("DELETE", "/index.html").await, get);
        assert_eq!(server.request("POST", "/").await, get);
    }

    #[tokio::test]
    async fn test_missing_file_yields_uniform_404() {
        let server = ServerFixture::new("missing-file");
        server.write("index.html", "home");

        let (status, content_type, body) = server.request("GET", "/missing.png").await;
        assert_eq!(status, 404);
        assert_eq!(content_type, "text/html");
        assert_eq!(&body[..], b"404: File not found");
    }
}
