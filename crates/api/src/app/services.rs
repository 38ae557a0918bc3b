use std::path::Path;
use std::sync::Arc;

use catalog_infra::{load_seed, InMemoryProductRepository, SeedError};
use catalog_products::{CatalogService, ProductRepository, ProductService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn ProductService>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }

    /// Wire the default catalog service on top of a repository.
    pub fn with_repository(repository: Arc<dyn ProductRepository>) -> Self {
        Self::new(Arc::new(CatalogService::new(repository)))
    }
}

/// Build services backed by the in-memory repository, optionally seeded.
pub fn build_services(seed_path: Option<&Path>) -> Result<AppServices, SeedError> {
    let repository = match seed_path {
        Some(path) => InMemoryProductRepository::from_seed(load_seed(path)?),
        None => {
            tracing::warn!("no seed file configured; starting with an empty catalog");
            InMemoryProductRepository::new()
        }
    };

    tracing::info!(
        sellers = repository.seller_count(),
        products = repository.product_count(),
        "product repository ready"
    );

    Ok(AppServices::with_repository(Arc::new(repository)))
}
