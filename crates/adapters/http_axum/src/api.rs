//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod comments;
#[allow(clippy::missing_errors_doc)]
pub mod people;
#[allow(clippy::missing_errors_doc)]
pub mod places;

use axum::Router;
use axum::routing::{get, post};

use placebook_app::ports::{PersonRepository, PlaceRepository};

use crate::state::AppState;

/// Build the resource routes.
pub fn routes<PR, PLR>() -> Router<AppState<PR, PLR>>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        // People
        .route(
            "/people",
            get(people::list::<PR, PLR>).post(people::create::<PR, PLR>),
        )
        .route(
            "/people/{id}",
            get(people::get::<PR, PLR>)
                .patch(people::update::<PR, PLR>)
                .delete(people::delete::<PR, PLR>),
        )
        // Places
        .route(
            "/places",
            get(places::list::<PR, PLR>).post(places::create::<PR, PLR>),
        )
        .route(
            "/places/{id}",
            get(places::get::<PR, PLR>)
                .patch(places::update::<PR, PLR>)
                .delete(places::delete::<PR, PLR>),
        )
        // Comments
        .route("/comments/{place_id}", post(comments::create::<PR, PLR>))
        .route(
            "/comments/{place_id}/{comment_id}",
            get(comments::get::<PR, PLR>)
                .patch(comments::update::<PR, PLR>)
                .delete(comments::delete::<PR, PLR>),
        )
}
