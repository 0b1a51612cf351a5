//! Preview orchestration: classify a share request and render its preview.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use sharehub_core::config::{PreviewConfig, PreviewTemplates, TemplatePair};
use sharehub_core::result::AppResult;
use sharehub_core::types::ShareId;
use sharehub_entity::entry::EntryKind;
use sharehub_entity::permission::Capability;

use super::context::PreviewContext;
use super::render::render_preview_html;
use super::size::format_file_size;
use super::template::{MagicVars, replace_magic_vars};
use crate::collaborators::{Collaborators, IdKind, PwaIcons};
use crate::context::Viewer;
use crate::share::bounded;
use crate::share::path::{SharePathResolver, clean_share_path};
use crate::share::redirect::{QueryMergeSet, RedirectUrlBuilder};
use crate::share::status::{ShareLoad, ShareStatusResolver};

/// What a preview ended up describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewScenario {
    /// A file the viewer may see.
    File,
    /// A folder the viewer may see.
    Folder,
    /// Undecodable id, missing share, missing entry, or failed lookup.
    InvalidLink,
    /// Expired, cancelled, or exhausted share.
    ShareExpired,
    /// Anonymous visitors may not open shares.
    NeedLogin,
    /// Password-protected share that was not unlocked.
    PasswordRequired,
}

impl PreviewScenario {
    /// Status label shown for non-content scenarios.
    pub fn status_label(&self) -> Option<&'static str> {
        match self {
            Self::File | Self::Folder => None,
            Self::InvalidLink => Some("Invalid Link"),
            Self::ShareExpired => Some("Share Expired"),
            Self::NeedLogin => Some("Login Required"),
            Self::PasswordRequired => Some("Password Required"),
        }
    }
}

/// A request to preview a share.
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    /// Public share id.
    pub id: String,
    /// Password supplied by the visitor, empty when none.
    pub password: String,
    /// Sub-path inside a folder share, empty for the share root.
    pub sub_path: String,
    /// Additional query parameters forwarded to the redirect target.
    pub extra_query: QueryMergeSet,
}

/// A rendered preview document.
#[derive(Debug, Clone)]
pub struct RenderedPreview {
    /// Scenario the document describes.
    pub scenario: PreviewScenario,
    /// Rendered title.
    pub title: String,
    /// Rendered description.
    pub description: String,
    /// Full HTML document.
    pub html: String,
}

/// Builds Open Graph previews of shares.
#[derive(Debug, Clone)]
pub struct PreviewService {
    collaborators: Collaborators,
    status: ShareStatusResolver,
    paths: SharePathResolver,
    templates: PreviewTemplates,
    long_url_route: String,
    lookup_timeout: Duration,
}

impl PreviewService {
    /// Creates a new preview service.
    pub fn new(collaborators: Collaborators, config: &PreviewConfig) -> Self {
        let lookup_timeout = Duration::from_millis(config.lookup_timeout_ms);
        let status = ShareStatusResolver::new(
            collaborators.shares.clone(),
            collaborators.validator.clone(),
            lookup_timeout,
        );
        let paths = SharePathResolver::new(collaborators.entries.clone(), lookup_timeout);
        Self {
            collaborators,
            status,
            paths,
            templates: config.templates.clone(),
            long_url_route: config.long_url_route.clone(),
            lookup_timeout,
        }
    }

    /// Redirect builder for the configured site.
    pub fn redirects(&self) -> AppResult<RedirectUrlBuilder> {
        Ok(RedirectUrlBuilder::new(
            self.collaborators.site.site_url()?,
            self.long_url_route.as_str(),
        ))
    }

    /// Render the preview of a share for a viewer.
    ///
    /// Problems with the share itself never fail this call; they select a
    /// status scenario instead. `Err` means the document cannot be built at
    /// all (for example an unusable site URL).
    pub async fn render(&self, request: &PreviewRequest, viewer: &Viewer) -> AppResult<RenderedPreview> {
        let base = self.collaborators.site.site_url()?;
        let site = self.collaborators.site.site_basic();
        let sub_path = clean_share_path(&request.sub_path);
        let redirects = RedirectUrlBuilder::new(base.clone(), self.long_url_route.as_str());

        let mut ctx = PreviewContext {
            site_name: site.name,
            site_description: site.description,
            site_url: base.as_str().trim_end_matches('/').to_string(),
            share_url: redirects.share_url(&request.id, &sub_path),
            share_id: request.id.clone(),
            thumbnail_url: thumbnail_url(&base, &self.collaborators.site.pwa()),
            redirect_url: redirects.build(
                &request.id,
                &request.password,
                &sub_path,
                &request.extra_query,
            ),
            ..PreviewContext::default()
        };

        let scenario = self.classify(request, viewer, &sub_path, &mut ctx).await;
        info!(share_id = %request.id, scenario = ?scenario, "Rendered share preview");
        Ok(self.finish(scenario, ctx))
    }

    async fn classify(
        &self,
        request: &PreviewRequest,
        viewer: &Viewer,
        sub_path: &str,
        ctx: &mut PreviewContext,
    ) -> PreviewScenario {
        let Ok(raw_id) = self.collaborators.ids.decode(&request.id, IdKind::Share) else {
            debug!(share_id = %request.id, "Share id could not be decoded");
            return PreviewScenario::InvalidLink;
        };

        let share = match self
            .status
            .resolve(ShareId::new(raw_id), viewer, &request.password)
            .await
        {
            ShareLoad::NotFound => return PreviewScenario::InvalidLink,
            ShareLoad::Error(e) => {
                warn!(share_id = %request.id, error = %e, "Share lookup failed while rendering preview");
                return PreviewScenario::InvalidLink;
            }
            ShareLoad::Expired { .. } => return PreviewScenario::ShareExpired,
            ShareLoad::Ok { share, unlocked } => {
                if viewer.is_anonymous() && !self.anonymous_can_open().await {
                    return PreviewScenario::NeedLogin;
                }
                if share.is_locked() && !unlocked {
                    return PreviewScenario::PasswordRequired;
                }
                share
            }
        };

        let resolved = match self
            .paths
            .resolve(&request.id, &request.password, &share, sub_path)
            .await
        {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(share_id = %request.id, error = %e, "Share entry is not available");
                return PreviewScenario::InvalidLink;
            }
        };

        ctx.owner_name = share.owner_nickname().to_string();
        ctx.display_name = resolved.display_name.clone();
        match resolved.kind {
            EntryKind::Folder => {
                ctx.folder_name = resolved.display_name;
                PreviewScenario::Folder
            }
            EntryKind::File => {
                ctx.file_name = resolved.display_name;
                ctx.file_size = format_file_size(resolved.size);
                ctx.file_ext = resolved.extension;
                PreviewScenario::File
            }
        }
    }

    async fn anonymous_can_open(&self) -> bool {
        let lookup = bounded(
            self.lookup_timeout,
            "Anonymous permission lookup",
            self.collaborators.permissions.anonymous_permissions(),
        )
        .await;
        match lookup {
            Ok(permissions) => permissions.enabled(Capability::ShareDownload),
            Err(e) => {
                warn!(error = %e, "Anonymous permission lookup failed");
                false
            }
        }
    }

    fn finish(&self, scenario: PreviewScenario, mut ctx: PreviewContext) -> RenderedPreview {
        if let Some(label) = scenario.status_label() {
            ctx.status = label.to_string();
            ctx.display_name = ctx.site_name.clone();
        }

        let (pair, vars): (&TemplatePair, MagicVars<'_>) = match scenario {
            PreviewScenario::File => (&self.templates.file, MagicVars::file(&ctx)),
            PreviewScenario::Folder => (&self.templates.folder, MagicVars::folder(&ctx)),
            _ => (&self.templates.status, MagicVars::status(&ctx)),
        };

        let title = replace_magic_vars(&pair.title, &vars);
        let description = replace_magic_vars(&pair.description, &vars);
        let html = render_preview_html(&ctx, &title, &description).into_string();

        RenderedPreview {
            scenario,
            title,
            description,
            html,
        }
    }
}

/// The PWA large icon, else the medium icon, made absolute against the site.
fn thumbnail_url(base: &Url, icons: &PwaIcons) -> String {
    let icon = if icons.large_icon.is_empty() {
        icons.medium_icon.as_str()
    } else {
        icons.large_icon.as_str()
    };
    if icon.is_empty() || icon.starts_with("http://") || icon.starts_with("https://") {
        return icon.to_string();
    }
    base.join(icon).map(String::from).unwrap_or_default()
}
