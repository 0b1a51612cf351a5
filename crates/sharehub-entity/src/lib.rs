//! # sharehub-entity
//!
//! Domain entity models for ShareHub. Every struct in this crate is a
//! record handed over by a collaborator (share store, entry resolver,
//! permission gate) or a value object built from one. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod entry;
pub mod permission;
pub mod share;
pub mod user;
