//! Products domain module.
//!
//! This crate contains the seller catalog read path: the `Product` value type,
//! the repository capability the catalog is read through, and the service
//! layer sitting between transport and storage (no IO, no HTTP).

pub mod product;
pub mod repository;
pub mod service;

pub use product::Product;
pub use repository::{ProductRepository, RepositoryError};
pub use service::{CatalogService, ProductService, ServiceError};
