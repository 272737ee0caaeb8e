//! Dashboard page hosting the star manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. Identity comes from the page props; a
//! guest is sent to the backend's login route with a full navigation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownContent, DropdownLink, DropdownTrigger};
use crate::components::stars_table::StarsTable;
use crate::net::types::{PageProps, RouteName};
use crate::util::auth::install_unauth_redirect;

/// Label for the header user menu.
pub fn user_menu_label(props: &PageProps) -> String {
    props.user().map(|user| user.name.clone()).unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let props = expect_context::<PageProps>();
    install_unauth_redirect(&props);
    let signed_in = props.user().is_some();

    view! {
        <Show
            when=move || signed_in
            fallback=move || view! { <p class="p-6 text-sm text-gray-500">"Redirecting to login..."</p> }
        >
            <div class="min-h-screen bg-gray-100">
                <header class="bg-white shadow">
                    <div class="mx-auto flex max-w-7xl items-center justify-between px-6 py-4">
                        <h1 class="text-xl font-semibold leading-tight text-gray-800">"Dashboard"</h1>
                        <UserMenu/>
                    </div>
                </header>
                <main class="mx-auto max-w-7xl py-12 px-6">
                    <StarsTable/>
                </main>
            </div>
        </Show>
    }
}

/// Header dropdown with the user's name and account links.
#[component]
fn UserMenu() -> impl IntoView {
    let props = expect_context::<PageProps>();
    let label = user_menu_label(&props);
    let home = props.route(RouteName::Home).to_owned();
    let logout = props.route(RouteName::Logout).to_owned();

    view! {
        <Dropdown>
            <DropdownTrigger>
                <span class="inline-flex items-center rounded-md px-3 py-2 text-sm font-medium text-gray-500 hover:text-gray-700">
                    {label}
                </span>
            </DropdownTrigger>
            <DropdownContent>
                <DropdownLink href=home.clone()>"Browse stars"</DropdownLink>
                <DropdownLink href=logout.clone()>"Log out"</DropdownLink>
            </DropdownContent>
        </Dropdown>
    }
}
