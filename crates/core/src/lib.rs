//! `catalog-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SellerId};
pub use value_object::ValueObject;
