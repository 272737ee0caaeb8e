//! HTTP client for the external stars backend.
//!
//! DESIGN
//! ======
//! The backend owns storage, validation and sessions. This module only moves
//! bytes: the relay passes request bodies through untouched and the bridge
//! asks it who the session user is. `StarsBackend` is the seam handlers and
//! tests depend on; `HttpBackend` is the reqwest implementation.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, header};
use client::net::types::User;
use url::Url;

use crate::config::AppConfig;

/// Request headers passed from the browser to the backend.
pub const FORWARDED_REQUEST_HEADERS: &[&str] =
    &["accept", "content-type", "cookie", "x-requested-with", "x-xsrf-token", "x-csrf-token"];

/// Response headers passed from the backend back to the browser.
pub const RELAYED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "location"];

/// Backend path answering with the session user.
pub const USER_PATH: &str = "api/user";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The target path does not form a valid URL against the backend base.
    #[error("invalid backend path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The request never produced a response.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The backend answered with an unexpected status.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("backend response decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One relayed call. `path` is relative to the backend base and may carry a query.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Async seam to the stars backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait StarsBackend: Send + Sync {
    /// Send a request and return whatever the backend answered, any status.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] only when no response was received.
    async fn relay(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;

    /// Resolve the session user for a browser cookie header.
    ///
    /// `Ok(None)` means the backend reported a guest.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on transport failures, unexpected statuses
    /// or an undecodable user body.
    async fn current_user(&self, cookie: Option<&str>) -> Result<Option<User>, UpstreamError>;
}

// =============================================================================
// HELPERS
// =============================================================================

/// Copy only the allow-listed headers, keeping repeated values.
///
/// Allow-list entries are lowercase, matching `HeaderName::as_str`.
pub fn filter_headers(source: &HeaderMap, allow: &[&str]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in source {
        if allow.contains(&name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Resolve `path` against the backend base URL.
///
/// # Errors
///
/// Returns [`UpstreamError::InvalidPath`] when the join fails.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url, UpstreamError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| UpstreamError::InvalidPath { path: path.to_owned(), reason: e.to_string() })
}

/// Map the session endpoint's answer onto a user or a guest.
///
/// # Errors
///
/// Returns [`UpstreamError`] for statuses other than success and the guest set,
/// or when a success body is not a user.
pub fn parse_user_response(status: StatusCode, body: &[u8]) -> Result<Option<User>, UpstreamError> {
    match status.as_u16() {
        200 => serde_json::from_slice::<User>(body)
            .map(Some)
            .map_err(|e| UpstreamError::Decode(e.to_string())),
        // 419 is the backend's expired-session status.
        401 | 403 | 419 => Ok(None),
        other => Err(UpstreamError::Status { status: other }),
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    /// Build the reqwest client with the configured timeouts.
    ///
    /// Redirects are not followed so that `Location` reaches the browser.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base: config.backend_url.clone() })
    }
}

#[async_trait::async_trait]
impl StarsBackend for HttpBackend {
    async fn relay(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let url = endpoint_url(&self.base, &request.path)?;
        let response = self
            .http
            .request(request.method, url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(UpstreamResponse { status, headers, body })
    }

    async fn current_user(&self, cookie: Option<&str>) -> Result<Option<User>, UpstreamError> {
        let url = endpoint_url(&self.base, USER_PATH)?;
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header("x-requested-with", "XMLHttpRequest");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        parse_user_response(status, &body)
    }
}
