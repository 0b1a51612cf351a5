//! # sharehub-api
//!
//! HTTP API layer for ShareHub built on Axum.
//!
//! Serves short share links, Open Graph previews for link-unfurl crawlers
//! (including interception of the front-end `/home` route), share info and
//! listing endpoints, middleware (request logging, CORS), extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
