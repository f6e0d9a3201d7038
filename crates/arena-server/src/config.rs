//! Server configuration loaded from the process environment.
use std::env;

use arena_core::EngineConfig;

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 8080;
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub(crate) struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    /// `None` lets actix pick one worker per core.
    pub(crate) workers: Option<usize>,
    pub(crate) max_body_bytes: usize,
    pub(crate) engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `PORT` - Listen port (default: 8080)
    /// - `HTTP_WORKERS` - Worker thread count (default: one per core)
    /// - `MAX_BODY_BYTES` - Largest accepted arena update (default: 65536)
    /// - `SCAN_RANGE` - Threat scan range in cells (default: 3, capped at 64)
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = read_var::<u16>(&lookup, "PORT") {
            config.port = port;
        }

        config.workers = read_var::<usize>(&lookup, "HTTP_WORKERS").map(|workers| workers.max(1));

        if let Some(limit) = read_var::<usize>(&lookup, "MAX_BODY_BYTES") {
            config.max_body_bytes = limit.max(1);
        }

        if let Some(range) = read_var::<u32>(&lookup, "SCAN_RANGE") {
            config.engine = EngineConfig::with_scan_range(range);
        }

        config
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not valid, using default");
            None
        }
    }
}
