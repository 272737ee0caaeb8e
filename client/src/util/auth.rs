//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session identity arrives with the page props; routes that require a user
//! apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::PageProps;

/// Whether a guarded page should send the visitor to the login route.
pub fn should_redirect_unauth(props: &PageProps) -> bool {
    props.user().is_none()
}

/// Redirect the browser to the login route when no user is present.
///
/// Login lives on the backend, so this is a full navigation rather than a
/// client-side route change.
pub fn install_unauth_redirect(props: &PageProps) {
    if !should_redirect_unauth(props) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let target = props.route(crate::net::types::RouteName::Login).to_owned();
        leptos::prelude::Effect::new(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&target);
            }
        });
    }
}
