//! `CurrentViewer` extractor: reads the trusted authentication header set by
//! the upstream auth proxy.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use tracing::warn;

use sharehub_core::types::UserId;
use sharehub_service::Viewer;

use crate::state::AppState;

/// The viewer of the current request. Missing or unparsable headers yield an
/// anonymous viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentViewer(pub Viewer);

impl CurrentViewer {
    /// Read the viewer from a header map.
    pub fn from_headers(headers: &HeaderMap, header: &str) -> Self {
        let Some(value) = headers.get(header) else {
            return Self(Viewer::anonymous());
        };

        match value.to_str().ok().and_then(|v| v.trim().parse::<UserId>().ok()) {
            Some(id) => Self(Viewer::user(id)),
            None => {
                warn!(header, "Ignoring unparsable viewer header");
                Self(Viewer::anonymous())
            }
        }
    }
}

impl std::ops::Deref for CurrentViewer {
    type Target = Viewer;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentViewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(
            &parts.headers,
            &state.config.server.viewer_header,
        ))
    }
}
