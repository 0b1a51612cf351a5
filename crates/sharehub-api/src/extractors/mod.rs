//! Custom Axum extractors.

pub mod viewer;

pub use viewer::CurrentViewer;
