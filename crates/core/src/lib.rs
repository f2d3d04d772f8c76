//! `campus-core` — domain foundation building blocks.
//!
//! Capability traits shared by every campus entity, plus identifiers and the
//! domain error model. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Identified, Named};
pub use error::{DomainError, DomainResult};
pub use id::StudentId;
