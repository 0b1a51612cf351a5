//! File and folder entries.

pub mod model;

pub use model::{Entry, EntryKind};
