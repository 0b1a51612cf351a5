//! Request handlers, organized by domain.

pub mod health;
pub mod info;
pub mod preview;
pub mod short_link;
