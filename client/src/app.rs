//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::PageProps;
use crate::pages::{dashboard::DashboardPage, home::HomePage};
use crate::util::page_props::{PAGE_PROPS_META, encode_page_props, resolve_page_props};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The request's page props are embedded in a meta element so the hydrating
/// client starts from the same session.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let props = use_context::<PageProps>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=PAGE_PROPS_META content=encode_page_props(&props)/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="font-sans antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page props context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(resolve_page_props());

    view! {
        <Stylesheet id="leptos" href="/pkg/stars.css"/>
        <Title text="Stars"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
