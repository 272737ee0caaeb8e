//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::types::NamedRoutes;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the stars backend, always ending in `/`.
    pub backend_url: Url,
    pub port: u16,
    pub timeouts: UpstreamTimeouts,
    /// Request body cap for the relay.
    pub max_upload_bytes: usize,
    /// Named routes handed to pages through the page props.
    pub routes: NamedRoutes,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `STARS_API_URL`: backend base URL (`http` or `https`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    /// - `MAX_UPLOAD_BYTES`: default 10 MiB
    /// - `ROUTE_LOGIN`, `ROUTE_REGISTER`, `ROUTE_LOGOUT`: default to the
    ///   matching path on the backend
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the backend URL is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the backend URL is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let raw = get("STARS_API_URL").ok_or(ConfigError::Missing { var: "STARS_API_URL" })?;
        let backend_url = parse_backend_url(&raw)?;

        let port = parse_or(get("PORT"), DEFAULT_PORT);
        let timeouts = UpstreamTimeouts {
            request_secs: parse_or(get("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_or(get("UPSTREAM_CONNECT_TIMEOUT_SECS"), DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };
        let max_upload_bytes = parse_or(get("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES);

        let backend_route = |path: &str| backend_url.join(path).map(String::from).unwrap_or_else(|_| format!("/{path}"));
        let defaults = NamedRoutes::default();
        let routes = NamedRoutes {
            login: get("ROUTE_LOGIN").unwrap_or_else(|| backend_route("login")),
            register: get("ROUTE_REGISTER").unwrap_or_else(|| backend_route("register")),
            logout: get("ROUTE_LOGOUT").unwrap_or_else(|| backend_route("logout")),
            ..defaults
        };

        Ok(Self { backend_url, port, timeouts, max_upload_bytes, routes })
    }
}

/// Unset or unparsable values fall back to the default.
fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|e| ConfigError::Invalid { var: "STARS_API_URL", reason: e.to_string() })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var: "STARS_API_URL",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    // Relative joins only keep the last segment when the path ends in `/`.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
