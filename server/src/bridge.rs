//! Page-props resolution for server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page request before rendering. The session user comes from
//! the backend (the browser cookie is forwarded); named routes come from
//! configuration. Any failure degrades to a guest render.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use axum::http::{HeaderMap, header};
use client::net::types::{AuthProps, NamedRoutes, PageProps};

use crate::upstream::StarsBackend;

/// Build the page props for one request.
pub async fn resolve_page_props(backend: &dyn StarsBackend, routes: &NamedRoutes, headers: &HeaderMap) -> PageProps {
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    let user = match backend.current_user(cookie).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed; rendering as guest");
            None
        }
    };
    PageProps { auth: AuthProps { user }, routes: routes.clone() }
}
