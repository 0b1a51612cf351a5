//! Explicit preview endpoint and the shared HTML response.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};

use sharehub_service::{PreviewRequest, QueryMergeSet, RenderedPreview};

use crate::dto::request::SharePreviewQuery;
use crate::error::ApiError;
use crate::extractors::CurrentViewer;
use crate::state::AppState;

/// `Cache-Control` of preview documents.
pub const PREVIEW_CACHE_CONTROL: &str = "public, no-cache";

/// A preview document as an HTML response.
pub fn html_response(preview: RenderedPreview) -> Response {
    let mut response = Html(preview.html).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PREVIEW_CACHE_CONTROL),
    );
    response
}

/// GET /api/shares/{id}/preview
pub async fn share_preview(
    State(state): State<AppState>,
    viewer: CurrentViewer,
    Path(id): Path<String>,
    Query(query): Query<SharePreviewQuery>,
) -> Result<Response, ApiError> {
    let request = PreviewRequest {
        id,
        password: query.password,
        sub_path: query.path,
        extra_query: QueryMergeSet::new(),
    };
    let preview = state.preview_service.render(&request, &viewer).await?;
    Ok(html_response(preview))
}
