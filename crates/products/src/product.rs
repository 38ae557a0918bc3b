use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ProductId, SellerId, ValueObject};

/// A catalog item belonging to exactly one seller.
///
/// Immutable once constructed. The JSON shape uses the field names
/// `ID`, `SellerID`, `Description` and `Price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    seller_id: SellerId,
    description: String,
    price: f64,
}

impl Product {
    /// Build a product, rejecting negative or non-finite prices.
    pub fn new(
        id: ProductId,
        seller_id: SellerId,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if price < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }

        Ok(Self {
            id,
            seller_id,
            description: description.into(),
            price,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn belongs_to(&self, seller_id: &SellerId) -> bool {
        &self.seller_id == seller_id
    }
}

impl ValueObject for Product {}

/// Wire representation; deserialization goes through `Product::new`.
#[derive(Serialize, Deserialize)]
struct ProductRecord {
    #[serde(rename = "ID")]
    id: ProductId,
    #[serde(rename = "SellerID")]
    seller_id: SellerId,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Price")]
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.id, r.seller_id, r.description, r.price)
    }
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            seller_id: p.seller_id,
            description: p.description,
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_product() -> Product {
        Product::new(
            ProductId::new("mock").unwrap(),
            SellerId::new("FEX112AC").unwrap(),
            "generic product",
            123.55,
        )
        .unwrap()
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let json = serde_json::to_string(&mock_product()).unwrap();
        assert_eq!(
            json,
            r#"{"ID":"mock","SellerID":"FEX112AC","Description":"generic product","Price":123.55}"#
        );
    }

    #[test]
    fn deserializes_from_catalog_field_names() {
        let p: Product = serde_json::from_str(
            r#"{"ID":"mock","SellerID":"FEX112AC","Description":"generic product","Price":123.55}"#,
        )
        .unwrap();
        assert_eq!(p, mock_product());
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new(
            ProductId::new("p1").unwrap(),
            SellerId::new("S1").unwrap(),
            "x",
            -0.01,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_finite_price() {
        let err = Product::new(
            ProductId::new("p1").unwrap(),
            SellerId::new("S1").unwrap(),
            "x",
            f64::NAN,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_price_is_allowed() {
        let p = Product::new(
            ProductId::new("free").unwrap(),
            SellerId::new("S1").unwrap(),
            "",
            0.0,
        )
        .unwrap();
        assert_eq!(p.price(), 0.0);
        assert_eq!(p.description(), "");
    }

    #[test]
    fn deserializing_a_negative_price_fails() {
        let res = serde_json::from_str::<Product>(
            r#"{"ID":"p1","SellerID":"S1","Description":"x","Price":-1}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn deserializing_an_empty_seller_fails() {
        let res = serde_json::from_str::<Product>(
            r#"{"ID":"p1","SellerID":"","Description":"x","Price":1}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn belongs_to_matches_only_owner() {
        let p = mock_product();
        assert!(p.belongs_to(&SellerId::new("FEX112AC").unwrap()));
        assert!(!p.belongs_to(&SellerId::new("XXXX").unwrap()));
    }
}
