//! Crawler interception of the front-end share route (`/home?path=sharehub://...`).
//!
//! Link-unfurl crawlers do not run the front-end, so a share address pasted
//! into a chat would unfurl as the bare application shell. For crawlers with
//! a usable share address this middleware answers with the preview document
//! instead; every other request passes through untouched.

use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use sharehub_service::share::redirect::PATH_KEY;
use sharehub_service::share::uri::parse_share_uri;
use sharehub_service::{PreviewRequest, QueryMergeSet};

use crate::extractors::CurrentViewer;
use crate::handlers::preview::html_response;
use crate::state::AppState;

/// Serve share previews to crawlers on the front-end share route.
pub async fn intercept_share_route(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match preview_request(&state, &request) {
        Some(preview) => {
            let viewer = CurrentViewer::from_headers(
                request.headers(),
                &state.config.server.viewer_header,
            );
            match state.preview_service.render(&preview, &viewer).await {
                Ok(rendered) => html_response(rendered),
                Err(e) => {
                    debug!(error = %e, "Preview unavailable, passing request through");
                    next.run(request).await
                }
            }
        }
        None => next.run(request).await,
    }
}

fn preview_request(state: &AppState, request: &Request) -> Option<PreviewRequest> {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return None;
    }

    let route = state.config.preview.long_url_route.trim_end_matches('/');
    let path = request.uri().path();
    if path != route && path.strip_prefix(route) != Some("/") {
        return None;
    }

    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !state.crawlers.is_known_crawler(user_agent) {
        return None;
    }

    let mut query = QueryMergeSet::parse(request.uri().query().unwrap_or(""));
    let address = query.remove(PATH_KEY)?.into_iter().next()?;
    let uri = parse_share_uri(&address)?;

    let limit = state.config.preview.max_param_length;
    if uri.id().is_empty()
        || uri.id().chars().count() > limit
        || uri.password().chars().count() > limit
    {
        debug!(limit, "Share address parameters out of bounds, passing request through");
        return None;
    }

    Some(PreviewRequest {
        id: uri.id().to_string(),
        password: uri.password().to_string(),
        sub_path: uri.path().to_string(),
        extra_query: query,
    })
}
