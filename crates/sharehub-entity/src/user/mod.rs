//! Share owner identity.

pub mod model;

pub use model::ShareOwner;
