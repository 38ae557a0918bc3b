//! JSON seed data for the in-memory repository.
//!
//! Format:
//! ```json
//! { "sellers": ["EMPTY"], "products": [{"ID": "...", "SellerID": "...", "Description": "...", "Price": 1.0}] }
//! ```
//! `sellers` lists sellers with no products yet and may be omitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalog_core::SellerId;
use catalog_products::Product;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub sellers: Vec<SellerId>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and validate a seed file.
pub fn load_seed(path: impl AsRef<Path>) -> Result<CatalogSeed, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let seed: CatalogSeed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        sellers = seed.sellers.len(),
        products = seed.products.len(),
        "loaded catalog seed"
    );
    Ok(seed)
}
