//! # sharehub-store
//!
//! Bundled implementations of the collaborator traits consumed by the share
//! services:
//!
//! - **memory**: share store and entry resolver backed by [dashmap](https://crates.io/crates/dashmap)
//! - **codec**: salted, reversible public id codec
//! - **validator**: expiry, cancellation, and download-limit rules
//! - **site**: static site settings and anonymous permissions from configuration
//!
//! The full bundle is assembled from configuration by [`build_collaborators`].

pub mod codec;
pub mod memory;
pub mod provider;
pub mod seed;
pub mod site;
pub mod validator;

pub use codec::SaltedIdCodec;
pub use memory::{MemoryEntryResolver, MemoryShareStore};
pub use provider::{build_collaborators, collaborators_from_seed};
pub use seed::SeedData;
pub use site::{StaticPermissionGate, StaticSiteSettings};
pub use validator::ExpiryValidator;
