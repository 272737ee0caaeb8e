//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/api/stars` relay and stitches it with Leptos SSR
//! rendering under a single Axum router. Every page render first resolves
//! the page props through the bridge and provides them as Leptos context.

pub mod stars;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, FromRef, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bridge;
use crate::state::AppState;

/// State for the Leptos page handler.
#[derive(Clone)]
pub struct SiteState {
    pub app: AppState,
    pub leptos_options: LeptosOptions,
    pub routes: Vec<AxumRouteListing>,
}

impl FromRef<SiteState> for LeptosOptions {
    fn from_ref(state: &SiteState) -> Self {
        state.leptos_options.clone()
    }
}

/// REST relay and health routes.
pub fn api_routes(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/stars", get(stars::relay_collection).post(stars::relay_collection))
        .route(
            "/api/stars/{id}",
            axum::routing::put(stars::relay_member)
                .post(stars::relay_member)
                .delete(stars::relay_member),
        )
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Render one Leptos route with the request's page props in context.
async fn leptos_page(State(site): State<SiteState>, req: Request<Body>) -> Response {
    let props = bridge::resolve_page_props(site.app.backend.as_ref(), &site.app.config.routes, req.headers()).await;
    let options = site.leptos_options.clone();
    let handler = leptos_axum::render_route_with_context(
        site.routes.clone(),
        move || provide_context(props.clone()),
        move || client::app::shell(options.clone()),
    );
    handler(State(site), req).await.into_response()
}

/// Full application: relay + Leptos SSR + static assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site = SiteState { app: state.clone(), leptos_options: leptos_options.clone(), routes: routes.clone() };
    let leptos_router = Router::new()
        .leptos_routes_with_handler(routes, get(leptos_page))
        .with_state(site);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
