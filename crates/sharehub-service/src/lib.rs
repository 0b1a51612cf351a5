//! # sharehub-service
//!
//! Share resolution and preview service layer for ShareHub. Services here
//! turn an incoming share reference (opaque id, optional password, optional
//! sub-path) into either a canonical redirect URL or an Open Graph preview
//! document.
//!
//! Services follow constructor injection: every external dependency is a
//! trait object in the [`Collaborators`] bundle, provided at construction
//! time.

pub mod collaborators;
pub mod context;
pub mod crawler;
pub mod preview;
pub mod share;

#[cfg(test)]
pub(crate) mod testing;

pub use collaborators::{
    Collaborators, EntryResolver, IdCodec, IdKind, PermissionGate, PwaIcons, ShareStore,
    ShareValidator, SiteBasic, SiteSettings,
};
pub use context::Viewer;
pub use crawler::CrawlerClassifier;
pub use preview::{PreviewRequest, PreviewScenario, PreviewService, RenderedPreview};
pub use share::{
    QueryMergeSet, RedirectUrlBuilder, ShareInfo, ShareInfoService, ShareLoad, ShareStatus,
    ShareStatusResolver, ShareUri, SharePathResolver,
};
