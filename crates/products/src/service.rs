//! Business-rule layer between the HTTP handler and the repository.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::SellerId;

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError};

/// Failure reported by the catalog service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Repository failure, surfaced with its original text.
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// The repository error this service error wraps, if any.
    pub fn repository_error(&self) -> Option<&RepositoryError> {
        match self {
            Self::Repository(e) => Some(e),
        }
    }
}

/// Catalog read operations exposed to the transport layer.
#[async_trait::async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Product>, ServiceError>;
}

/// Default service: forwards to the repository unchanged.
///
/// Filtering, enrichment or authorization rules belong here, not in the
/// handler.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ProductService for CatalogService {
    async fn get_all_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Product>, ServiceError> {
        tracing::debug!(seller_id = %seller_id, "fetching seller catalog");
        let products = self.repository.get_all_by_seller(seller_id).await?;
        Ok(products)
    }
}
