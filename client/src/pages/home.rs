//! Public star browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for everyone. Fetches the collection once on mount, lists
//! names in a sidebar and shows the active star's details beside it.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api::StarApi;
use crate::net::types::Star;
use crate::state::browser::BrowserState;
use crate::util::classes::join_classes;
use crate::util::sanitize::safe_image_src;

/// Sidebar entry classes; the active entry is highlighted.
pub fn list_item_classes(active: bool) -> String {
    join_classes(&[
        "block w-full text-left px-4 py-2 rounded-md text-sm transition",
        if active { "bg-gray-800 text-white" } else { "text-gray-700 hover:bg-gray-100" },
    ])
}

/// Fetch the collection into the browser state.
pub async fn load_browser<A: StarApi>(api: &A, browser: RwSignal<BrowserState>) {
    browser.update(BrowserState::begin_load);
    let result = api.list_stars().await;
    browser.update(|b| b.finish_load(result));
}

#[component]
pub fn HomePage() -> impl IntoView {
    let browser = RwSignal::new(BrowserState::default());

    // Loading starts inside the task so the first client render matches the server's.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_browser(&crate::net::api::HttpStarApi, browser).await;
    });

    let entries = move || {
        browser
            .get()
            .stars
            .into_iter()
            .enumerate()
            .map(|(index, star)| {
                view! {
                    <li>
                        <button
                            type="button"
                            class=move || list_item_classes(browser.with(|b| b.is_active(index)))
                            on:click=move |_| browser.update(|b| b.select(index))
                        >
                            {star.display_name()}
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let selected = move || browser.with(|b| b.selected().cloned());

    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar/>
            <main class="mx-auto max-w-6xl px-6 pb-12">
                <Show
                    when=move || !browser.with(|b| b.loading)
                    fallback=move || view! { <p class="text-sm text-gray-500">"Loading stars..."</p> }
                >
                    <div class="grid gap-6 md:grid-cols-[16rem_1fr]">
                        <aside class="rounded-lg bg-white p-4 shadow-sm">
                            <ul class="space-y-1">{entries}</ul>
                        </aside>
                        {move || selected().map(|star| view! { <StarDetail star=star/> })}
                    </div>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn StarDetail(star: Star) -> impl IntoView {
    let src = star.image.as_deref().map(safe_image_src);

    view! {
        <article class="rounded-lg bg-white p-6 shadow-sm">
            {src.map(|src| view! { <img src=src alt="" class="mb-4 h-64 w-full rounded-md object-cover"/> })}
            <h1 class="text-2xl font-semibold text-gray-900">{star.display_name()}</h1>
            <p class="mt-4 whitespace-pre-line text-gray-700">{star.description}</p>
        </article>
    }
}
