//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check, the optional REST proxy and the
//! Leptos SSR console under a single Axum router. Hashed WASM/JS/CSS assets
//! are served from the Leptos site root under `/pkg`.

pub mod proxy;


use std::path::PathBuf;

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Non-SSR routes: health check plus the REST proxy when configured.
pub fn api_routes(config: &HostConfig) -> Router {
    let router = Router::new().route("/healthz", get(healthz));
    match config.upstream_url.as_deref() {
        Some(_) if config.proxy_prefix().is_empty() => {
            tracing::warn!("SCM_REST_URL is `/`; REST proxy disabled to keep the console routes reachable");
            router
        }
        Some(upstream) => {
            tracing::info!(prefix = config.proxy_prefix(), %upstream, "REST proxy enabled");
            router.merge(proxy::proxy_routes(config.proxy_prefix(), upstream))
        }
        None => router,
    }
}

/// Full application: API routes + Leptos SSR console + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(console::app::App);
    let settings = config.settings();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(settings.clone()),
            {
                let opts = leptos_options.clone();
                move || console::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
