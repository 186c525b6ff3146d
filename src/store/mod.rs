//! Catalog store: a single-writer actor owning the in-memory movie list.
//!
//! Every read and mutation goes through the actor mailbox, so concurrent
//! request handlers never touch the list directly.

pub mod actor;

pub use actor::{CatalogHandle, CatalogMessage, spawn};
