//! Data-access capability for seller-scoped catalog reads.

use thiserror::Error;

use catalog_core::SellerId;

use crate::product::Product;

/// Failure reported by a product repository.
///
/// Both variants surface to clients with their display text, so the messages
/// are part of the public contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The seller is not known to the backing store.
    #[error("seller not found based on the given id")]
    SellerNotFound,

    /// The backing store failed.
    #[error("{0}")]
    Internal(String),
}

impl RepositoryError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Fetch all products for one seller.
///
/// Implementations must:
/// - return only products whose seller id equals `seller_id`
/// - return them in insertion order, deterministically for a fixed snapshot
/// - return `SellerNotFound` for unknown sellers and `Internal` on store failure
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Product>, RepositoryError>;
}
