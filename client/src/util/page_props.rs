//! Page-props handoff between the server render and the hydrating client.
//!
//! The server provides `PageProps` through Leptos context and the shell
//! serializes them into `<meta name="page-props">`. The browser reads that
//! element back before the app mounts, so both renders see the same session.

#[cfg(test)]
#[path = "page_props_test.rs"]
mod page_props_test;

use leptos::prelude::*;

use crate::net::types::PageProps;

/// `name` attribute of the meta element carrying the serialized props.
pub const PAGE_PROPS_META: &str = "page-props";

/// JSON for the meta `content` attribute. Leptos escapes attribute values.
pub fn encode_page_props(props: &PageProps) -> String {
    serde_json::to_string(props).unwrap_or_else(|e| {
        leptos::logging::warn!("page props encode failed: {e}");
        "{}".to_owned()
    })
}

/// Parse serialized props; malformed input degrades to a guest context.
pub fn decode_page_props(raw: &str) -> PageProps {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        leptos::logging::warn!("page props decode failed: {e}");
        PageProps::default()
    })
}

/// Props embedded in the current document, when running in the browser.
pub fn from_document() -> Option<PageProps> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{PAGE_PROPS_META}\"]");
        let meta = document.query_selector(&selector).ok()??;
        let raw = meta.get_attribute("content")?;
        Some(decode_page_props(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Props for this render: server context first, then the document.
pub fn resolve_page_props() -> PageProps {
    use_context::<PageProps>().or_else(from_document).unwrap_or_default()
}
