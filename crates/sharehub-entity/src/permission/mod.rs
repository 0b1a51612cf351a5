//! Group capability entities.

pub mod model;

pub use model::{Capability, PermissionSet};
