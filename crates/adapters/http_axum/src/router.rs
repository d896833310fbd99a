//! Axum router assembly.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use placebook_app::ports::{PersonRepository, PlaceRepository};

use crate::blank::strip_blank_patch_fields;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Resource routes are mounted at the root. Requests go through, from the
/// outside in: CORS restricted to `allowed_origin`, a [`TraceLayer`] logging
/// each request/response at the `DEBUG` level, then the blank-field filter
/// for PATCH bodies.
pub fn build<PR, PLR>(state: AppState<PR, PLR>, allowed_origin: HeaderValue) -> Router
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(from_fn(strip_blank_patch_fields))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn home() -> &'static str {
    "placebook is running"
}

async fn health_check() -> &'static str {
    "OK"
}
