//! Infrastructure layer: repository implementations and seed data loading.

pub mod read_model;
pub mod seed;

pub use read_model::InMemoryProductRepository;
pub use seed::{load_seed, CatalogSeed, SeedError};
