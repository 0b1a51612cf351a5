//! In-memory collaborators backed by `DashMap`.

pub mod entries;
pub mod shares;

pub use entries::MemoryEntryResolver;
pub use shares::MemoryShareStore;
