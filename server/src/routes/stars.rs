//! `/api/stars` relay handlers.
//!
//! ERROR HANDLING
//! ==============
//! Backend answers of any status are passed through as-is. Only a missing
//! answer (transport failure) is turned into `502 Bad Gateway` here.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::upstream::{FORWARDED_REQUEST_HEADERS, RELAYED_RESPONSE_HEADERS, UpstreamRequest, filter_headers};

const STARS_PATH: &str = "api/stars";

/// Backend path for a relayed call, keeping the browser's query string.
pub fn upstream_path(path: &str, uri: &Uri) -> String {
    match uri.query() {
        Some(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.to_owned(),
    }
}

/// `GET|POST /api/stars`
pub async fn relay_collection(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    relay(&state, method, upstream_path(STARS_PATH, &uri), &headers, body).await
}

/// `PUT|POST|DELETE /api/stars/{id}`
pub async fn relay_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    relay(&state, method, upstream_path(&format!("{STARS_PATH}/{id}"), &uri), &headers, body).await
}

async fn relay(state: &AppState, method: Method, path: String, headers: &HeaderMap, body: Bytes) -> Response {
    let request = UpstreamRequest {
        method: method.clone(),
        path: path.clone(),
        headers: filter_headers(headers, FORWARDED_REQUEST_HEADERS),
        body,
    };

    match state.backend.relay(request).await {
        Ok(upstream) => {
            tracing::debug!(%method, %path, status = upstream.status.as_u16(), "stars relay");
            let mut response = Response::new(Body::from(upstream.body));
            *response.status_mut() = upstream.status;
            *response.headers_mut() = filter_headers(&upstream.headers, RELAYED_RESPONSE_HEADERS);
            response
        }
        Err(e) => {
            tracing::error!(%method, %path, error = %e, "stars relay failed");
            (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": "The stars service is unavailable." })))
                .into_response()
        }
    }
}
