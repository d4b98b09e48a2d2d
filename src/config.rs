// Configuration module
// Explicitly constructed, immutable configuration shared across all requests.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Site configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory the server serves files from, relative to the working
    /// directory unless absolute.
    pub root: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from environment variables with built-in defaults.
    ///
    /// Variables use the `SERVER` prefix, e.g. `SERVER_SERVER.PORT=9000`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("site.root", "public")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Immutable per-process state shared by every connection task.
///
/// Holds the loaded configuration and the canonicalized site root. The root
/// is resolved exactly once at startup; it is the security boundary every
/// resolved path is checked against, so it must exist when the server starts.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, String> {
        let root = Path::new(&config.site.root)
            .canonicalize()
            .map_err(|e| format!("Site root '{}' is not accessible: {e}", config.site.root))?;

        Ok(Self { config, root })
    }
}
