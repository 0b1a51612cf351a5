//! Share info and per-user share listing.

use axum::Json;
use axum::extract::{Path, Query, State};

use sharehub_core::error::AppError;
use sharehub_core::types::UserId;
use sharehub_service::{IdKind, ShareInfo};

use crate::dto::request::ShareInfoQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentViewer;
use crate::state::AppState;

/// GET /api/shares/{id}/info
pub async fn share_info(
    State(state): State<AppState>,
    viewer: CurrentViewer,
    Path(id): Path<String>,
    Query(query): Query<ShareInfoQuery>,
) -> Result<Json<ApiResponse<ShareInfo>>, ApiError> {
    let info = state
        .info_service
        .get(&id, &query.password, query.count_views, &viewer)
        .await?;
    Ok(Json(ApiResponse::ok(info)))
}

/// GET /api/users/{id}/shares
///
/// `{id}` is the public (encoded) user id.
pub async fn list_user_shares(
    State(state): State<AppState>,
    viewer: CurrentViewer,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ShareInfo>>>, ApiError> {
    let owner = state
        .collaborators
        .ids
        .decode(&id, IdKind::User)
        .map_err(|_| AppError::not_found("User not found"))?;
    let shares = state
        .info_service
        .list_for_user(UserId::new(owner), &viewer)
        .await?;
    Ok(Json(ApiResponse::ok(shares)))
}
