//! Open Graph share previews for link-unfurl crawlers.

pub mod context;
pub mod render;
pub mod service;
pub mod size;
pub mod template;

pub use context::PreviewContext;
pub use render::render_preview_html;
pub use service::{PreviewRequest, PreviewScenario, PreviewService, RenderedPreview};
pub use size::format_file_size;
pub use template::{MagicVars, replace_magic_vars};
