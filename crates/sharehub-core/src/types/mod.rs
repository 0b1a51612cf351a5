//! Shared domain types used across multiple ShareHub crates.

pub mod id;

pub use id::{EntryId, ShareId, UserId};
