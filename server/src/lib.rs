//! HTTP surface of the ONE PARK PEAK site: server-side rendering of the
//! landing page, static assets, a health check, and response middleware.

pub mod config;
pub mod error;
pub mod health;
pub mod redirect;
pub mod security;

use app::{component, shell};
use axum::{Router, middleware, routing::get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use tower_http::{
    compression::{CompressionLayer, predicate::SizeAbove},
    trace::TraceLayer,
};

use crate::{health::health_handler, redirect::redirect_www, security::security_headers};

/// Builds the full application router.
///
/// Static files under `site_root` are served by the fallback, which renders
/// the 404 view for anything it cannot find.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(component);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(shell))
        .layer(middleware::from_fn(security_headers))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(redirect_www)),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
        .with_state(leptos_options)
}
