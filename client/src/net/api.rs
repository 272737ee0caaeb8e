//! REST API helpers for the `/api/stars` surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, multipart bodies
//! built with the browser's `FormData`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a rejected call degrades
//! into a logged message and an untouched working set.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Star, StarId};

/// Collection endpoint for list and create.
pub const STARS_ENDPOINT: &str = "/api/stars";

/// Form field carrying the HTTP method override for multipart updates.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Form field carrying the staged image file.
pub const IMAGE_FIELD: &str = "image";

/// Session cookie carrying the backend's CSRF token.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the backend expects the decoded token in on mutating calls.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// File handle staged for upload. Only the browser can hold real files.
#[cfg(feature = "hydrate")]
pub type StagedFile = web_sys::File;
/// File handle staged for upload. Only the browser can hold real files.
#[cfg(not(feature = "hydrate"))]
pub type StagedFile = ();

/// Member endpoint for update and delete.
#[must_use]
pub fn star_endpoint(id: StarId) -> String {
    format!("{STARS_ENDPOINT}/{id}")
}

/// Percent-decoded `XSRF-TOKEN` value from a `document.cookie` string.
#[must_use]
pub fn xsrf_token(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name.trim() == XSRF_COOKIE).then_some(value.trim())
        })
        .filter(|value| !value.is_empty())
        .map(|value| percent_encoding::percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Reasons a REST call is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Multipart body for create and update calls.
///
/// Text fields keep insertion order; `image` is only sent when a file is staged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarPayload<F> {
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<F>,
}

impl<F> StarPayload<F> {
    /// Value of a text field, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Whether the payload carries a multipart part with this name.
    #[must_use]
    pub fn has_part(&self, key: &str) -> bool {
        if key == IMAGE_FIELD {
            return self.image.is_some();
        }
        self.field(key).is_some()
    }
}

/// Transport seam for the star collection.
///
/// [`HttpStarApi`] talks to the server; tests substitute a recording mock.
#[async_trait(?Send)]
pub trait StarApi {
    /// Staged file type carried by payloads.
    type File: Clone + 'static;

    /// `GET /api/stars`
    async fn list_stars(&self) -> Result<Vec<Star>, ApiError>;

    /// `POST /api/stars`
    async fn create_star(&self, payload: StarPayload<Self::File>) -> Result<Star, ApiError>;

    /// `POST /api/stars/{id}` with `_method=PUT`.
    async fn update_star(&self, id: StarId, payload: StarPayload<Self::File>) -> Result<Star, ApiError>;

    /// `DELETE /api/stars/{id}`
    async fn delete_star(&self, id: StarId) -> Result<(), ApiError>;
}

/// Browser HTTP client for the star endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpStarApi;

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn form_data(payload: &StarPayload<web_sys::File>) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (key, value) in &payload.fields {
        form.append_with_str(key, value).map_err(js_error)?;
    }
    if let Some(file) = &payload.image {
        form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
fn document_xsrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
    xsrf_token(&document.cookie().ok()?)
}

/// Common headers for create, update and delete, including the CSRF token when present.
#[cfg(feature = "hydrate")]
fn mutating(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest");
    match document_xsrf_token() {
        Some(token) => builder.header(XSRF_HEADER, &token),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send_multipart(url: &str, payload: &StarPayload<web_sys::File>) -> Result<Star, ApiError> {
    // No explicit content-type: the browser adds the multipart boundary.
    let resp = mutating(gloo_net::http::Request::post(url))
        .body(form_data(payload)?)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<Star>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl StarApi for HttpStarApi {
    type File = StagedFile;

    async fn list_stars(&self) -> Result<Vec<Star>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(STARS_ENDPOINT)
                .header("Accept", "application/json")
                .header("X-Requested-With", "XMLHttpRequest")
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.json::<Vec<Star>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_star(&self, payload: StarPayload<Self::File>) -> Result<Star, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send_multipart(STARS_ENDPOINT, &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_star(&self, id: StarId, payload: StarPayload<Self::File>) -> Result<Star, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send_multipart(&star_endpoint(id), &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_star(&self, id: StarId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = mutating(gloo_net::http::Request::delete(&star_endpoint(id)))
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
