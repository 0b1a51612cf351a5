//! Share resolution: addresses, status, sub-paths, redirects, and info.

pub mod info;
pub mod path;
pub mod redirect;
pub mod status;
pub mod uri;

use std::future::Future;
use std::time::Duration;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;

pub use info::{ShareInfo, ShareInfoService};
pub use path::{ResolvedEntry, SharePathResolver, clean_share_path};
pub use redirect::{QueryMergeSet, RedirectUrlBuilder};
pub use status::{ShareLoad, ShareStatus, ShareStatusResolver};
pub use uri::{ShareUri, parse_share_uri, sanitize_percent_escapes};

/// Run a collaborator call with an upper time bound.
pub(crate) async fn bounded<T, F>(limit: Duration, what: &str, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(AppError::service_unavailable(format!(
            "{what} timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
