//! Route definitions for the ShareHub HTTP surface.
//!
//! JSON endpoints are mounted under `/api`; short share links live at `/s`.
//! The front-end share route is not routed here: crawler requests to it are
//! answered by the share preview middleware applied in [`crate::app`].

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes, threaded with `AppState`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(share_routes())
        .merge(user_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(short_link_routes())
        .with_state(state)
}

/// Public short links
fn short_link_routes() -> Router<AppState> {
    Router::new()
        .route("/s/{id}", get(handlers::short_link::open_share))
        .route("/s/{id}/{password}", get(handlers::short_link::open_locked_share))
}

/// Share info and preview
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares/{id}/info", get(handlers::info::share_info))
        .route("/shares/{id}/preview", get(handlers::preview::share_preview))
}

/// Per-user listings
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/{id}/shares", get(handlers::info::list_user_shares))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
