#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the remote storefront catalog API.
//!
//! The catalog API is externally owned, so decoding is lenient: every field
//! except the identifier defaults when it is missing or `null`. Records that
//! lack an identifier fail to decode and are skipped by the caller.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable product identifier assigned by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Category label as reported by `GET /products/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap a raw category label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregate customer rating attached to a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, nominally between 0 and 5.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f64,
    /// Number of ratings contributing to the average.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Product record returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within a catalog.
    pub id: ProductId,
    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Long-form description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Unit price in the store currency.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Category label the product belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
    /// Product image URI.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Customer rating summary.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: Rating,
}

impl Product {
    /// Minimal product with the given id, title, and category; used by fixtures.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            description: String::new(),
            price: 0.0,
            category: Category::new(category),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Builder-style description setter.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style price setter.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builder-style rating setter.
    #[must_use]
    pub const fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating { rate, count };
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_record() {
        let payload = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(payload).expect("decode product");
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.category.as_str(), "men's clothing");
        assert!((product.price - 109.95).abs() < f64::EPSILON);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn missing_and_null_fields_default() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "title": null, "rating": {"rate": 4.1}}"#)
                .expect("decode sparse product");
        assert_eq!(product.title, "");
        assert_eq!(product.description, "");
        assert!(product.price.abs() < f64::EPSILON);
        assert_eq!(product.rating.count, 0);
        assert!((product.rating.rate - 4.1).abs() < f64::EPSILON);
    }

    #[test]
    fn record_without_id_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"title": "orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let encoded = serde_json::to_string(&Category::from("jewelery")).expect("encode");
        assert_eq!(encoded, "\"jewelery\"");
    }
}
