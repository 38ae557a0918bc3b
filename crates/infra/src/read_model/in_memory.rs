use std::collections::HashSet;
use std::sync::RwLock;

use catalog_core::SellerId;
use catalog_products::{Product, ProductRepository, RepositoryError};

use crate::seed::CatalogSeed;

#[derive(Debug, Default)]
struct Catalog {
    sellers: HashSet<SellerId>,
    /// Insertion order is the listing order.
    products: Vec<Product>,
}

/// In-memory product repository for tests/dev.
///
/// A seller is known once registered explicitly or once one of its products
/// is inserted. Known sellers without products list as empty catalogs.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from seed data (sellers first, then products in order).
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let repo = Self::new();
        for seller_id in seed.sellers {
            repo.register_seller(seller_id);
        }
        for product in seed.products {
            repo.insert(product);
        }
        repo
    }

    pub fn register_seller(&self, seller_id: SellerId) {
        match self.inner.write() {
            Ok(mut catalog) => {
                catalog.sellers.insert(seller_id);
            }
            Err(_) => tracing::warn!(seller_id = %seller_id, "product store lock poisoned; seller not registered"),
        }
    }

    pub fn insert(&self, product: Product) {
        match self.inner.write() {
            Ok(mut catalog) => {
                catalog.sellers.insert(product.seller_id().clone());
                catalog.products.push(product);
            }
            Err(_) => tracing::warn!(
                product_id = %product.id(),
                seller_id = %product.seller_id(),
                "product store lock poisoned; product dropped"
            ),
        }
    }

    pub fn seller_count(&self) -> usize {
        self.inner.read().map(|c| c.sellers.len()).unwrap_or(0)
    }

    pub fn product_count(&self) -> usize {
        self.inner.read().map(|c| c.products.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Product>, RepositoryError> {
        let catalog = self
            .inner
            .read()
            .map_err(|_| RepositoryError::internal("product store lock poisoned"))?;

        if !catalog.sellers.contains(seller_id) {
            return Err(RepositoryError::SellerNotFound);
        }

        Ok(catalog
            .products
            .iter()
            .filter(|p| p.belongs_to(seller_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use catalog_core::ProductId;

    fn seller(id: &str) -> SellerId {
        SellerId::new(id).unwrap()
    }

    fn product(id: &str, seller_id: &str, price: f64) -> Product {
        Product::new(ProductId::new(id).unwrap(), seller(seller_id), format!("product {id}"), price).unwrap()
    }

    #[tokio::test]
    async fn lists_only_the_sellers_products_in_insertion_order() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("b", "S1", 2.0));
        repo.insert(product("x", "S2", 9.0));
        repo.insert(product("a", "S1", 1.0));
        repo.insert(product("c", "S1", 3.0));

        let got = repo.get_all_by_seller(&seller("S1")).await.unwrap();
        let ids: Vec<&str> = got.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(got.iter().all(|p| p.seller_id() == &seller("S1")));
    }

    #[tokio::test]
    async fn unknown_seller_is_not_found() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("a", "S1", 1.0));

        let err = repo.get_all_by_seller(&seller("NOEXISTS")).await.unwrap_err();
        assert_eq!(err, RepositoryError::SellerNotFound);
        assert_eq!(err.to_string(), "seller not found based on the given id");
    }

    #[tokio::test]
    async fn registered_seller_without_products_lists_empty() {
        let repo = InMemoryProductRepository::new();
        repo.register_seller(seller("EMPTY"));

        let got = repo.get_all_by_seller(&seller("EMPTY")).await.unwrap();
        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("a", "S1", 1.0));
        repo.insert(product("b", "S1", 2.0));

        let first = repo.get_all_by_seller(&seller("S1")).await.unwrap();
        let second = repo.get_all_by_seller(&seller("S1")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn poisoned_lock_is_an_internal_error() {
        let repo = Arc::new(InMemoryProductRepository::new());
        repo.insert(product("a", "S1", 1.0));

        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = repo.get_all_by_seller(&seller("S1")).await.unwrap_err();
        assert_eq!(err, RepositoryError::internal("product store lock poisoned"));
    }

    #[test]
    fn writes_after_poisoning_are_dropped_without_panicking() {
        let repo = Arc::new(InMemoryProductRepository::new());

        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        repo.register_seller(seller("S1"));
        repo.insert(product("a", "S1", 1.0));

        assert_eq!(repo.seller_count(), 0);
        assert_eq!(repo.product_count(), 0);
    }

    #[test]
    fn from_seed_registers_sellers_and_products() {
        let seed = CatalogSeed {
            sellers: vec![seller("EMPTY")],
            products: vec![product("a", "S1", 1.0), product("b", "S2", 2.0)],
        };

        let repo = InMemoryProductRepository::from_seed(seed);
        assert_eq!(repo.seller_count(), 3);
        assert_eq!(repo.product_count(), 2);
    }
}
