//! Department API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::deny_anonymous;
use crate::core::{Config, ServerState};

pub fn router(config: &Config) -> Router<ServerState> {
    Router::new().nest("/departments", routes(config))
}

fn routes(config: &Config) -> Router<ServerState> {
    // List carries an optional anonymous-caller guard; every other
    // operation is open. Policy only — real authentication is a
    // deployment concern.
    let mut list_routes = Router::new().route("/", get(handler::list));
    if config.protect_list {
        list_routes = list_routes.layer(middleware::from_fn(deny_anonymous));
    }

    let crud_routes = Router::new()
        .route("/", post(handler::create))
        .route("/latest", get(handler::latest))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/name", put(handler::rename));

    list_routes.merge(crud_routes)
}
