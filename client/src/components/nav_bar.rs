//! Top navigation for the public browser page.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::net::types::{PageProps, RouteName};

const LINK_CLASSES: &str = "rounded-md px-3 py-2 text-black ring-1 ring-transparent transition \
                            hover:text-black/70 focus:outline-none focus-visible:ring-[#FF2D20]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Signed-in users get a dashboard link; guests get log in and register.
pub fn nav_links(props: &PageProps) -> Vec<NavLink> {
    if props.user().is_some() {
        return vec![NavLink { label: "Dashboard", href: props.route(RouteName::Dashboard).to_owned() }];
    }
    vec![
        NavLink { label: "Log in", href: props.route(RouteName::Login).to_owned() },
        NavLink { label: "Register", href: props.route(RouteName::Register).to_owned() },
    ]
}

#[component]
pub fn NavBar() -> impl IntoView {
    let props = expect_context::<PageProps>();
    let links = nav_links(&props)
        .into_iter()
        .map(|link| view! { <a href=link.href class=LINK_CLASSES>{link.label}</a> })
        .collect::<Vec<_>>();

    view! {
        <header class="flex items-center justify-between py-6 px-6">
            <a href=props.route(RouteName::Home).to_owned() class="text-xl font-semibold text-gray-800">
                "Stars"
            </a>
            <nav class="-mx-3 flex flex-1 justify-end">{links}</nav>
        </header>
    }
}
