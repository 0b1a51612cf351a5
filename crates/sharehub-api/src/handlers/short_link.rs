//! Short share links: `/s/{id}` and `/s/{id}/{password}`.
//!
//! Crawlers get the preview document. Everyone else, and crawlers whose
//! preview cannot be built, is redirected to the long-form front-end URL.

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use sharehub_service::share::redirect::PATH_KEY;
use sharehub_service::{PreviewRequest, QueryMergeSet};

use crate::error::ApiError;
use crate::extractors::CurrentViewer;
use crate::handlers::preview::html_response;
use crate::state::AppState;

/// GET /s/{id}
pub async fn open_share(
    State(state): State<AppState>,
    viewer: CurrentViewer,
    headers: HeaderMap,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    respond(&state, viewer, &headers, id, String::new(), query).await
}

/// GET /s/{id}/{password}
pub async fn open_locked_share(
    State(state): State<AppState>,
    viewer: CurrentViewer,
    headers: HeaderMap,
    Path((id, password)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Response {
    respond(&state, viewer, &headers, id, password, query).await
}

async fn respond(
    state: &AppState,
    viewer: CurrentViewer,
    headers: &HeaderMap,
    id: String,
    password: String,
    query: Option<String>,
) -> Response {
    let mut extra_query = QueryMergeSet::parse(query.as_deref().unwrap_or(""));
    let sub_path = extra_query
        .remove(PATH_KEY)
        .and_then(|values| values.into_iter().next())
        .unwrap_or_default();
    let request = PreviewRequest {
        id,
        password,
        sub_path,
        extra_query,
    };

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if state.crawlers.is_known_crawler(user_agent) {
        match state.preview_service.render(&request, &viewer).await {
            Ok(preview) => return html_response(preview),
            Err(e) => warn!(share_id = %request.id, error = %e, "Preview failed, redirecting crawler"),
        }
    }

    match redirect(state, &request) {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

fn redirect(state: &AppState, request: &PreviewRequest) -> Result<Response, ApiError> {
    let target = state.preview_service.redirects()?.build(
        &request.id,
        &request.password,
        &request.sub_path,
        &request.extra_query,
    );
    debug!(share_id = %request.id, "Redirecting share link");

    let location = HeaderValue::from_str(&target).map_err(|e| {
        ApiError(sharehub_core::AppError::internal(format!(
            "Redirect target is not a valid header: {e}"
        )))
    })?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
