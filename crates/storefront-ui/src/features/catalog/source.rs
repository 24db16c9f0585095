//! Catalog fetching seam and payload normalization.
//!
//! # Design
//! - [`CatalogSource`] is the only way the controller reaches the remote API,
//!   so tests can script responses.
//! - Payload normalization is shared by every source: non-array bodies become
//!   empty lists and undecodable elements are skipped.
//! - Product failures are surfaced to the caller; category failures degrade to
//!   an empty list because tags are a convenience.

use std::collections::HashSet;

use async_trait::async_trait;
use futures_util::future::join;
use serde_json::Value;
use storefront_models::{Category, Product};
use tracing::{debug, info, warn};

use crate::core::error::FetchError;

/// Read-only access to the remote product catalog.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch every product.
    ///
    /// # Errors
    /// Returns a [`FetchError`] on transport, status, or decode failure.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch every category label.
    ///
    /// # Errors
    /// Returns a [`FetchError`] on transport, status, or decode failure.
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// Joint result of one catalog load.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogLoad {
    /// Products, or the error that blocks the shop view.
    pub products: Result<Vec<Product>, FetchError>,
    /// Category labels; empty when the category request failed.
    pub categories: Vec<Category>,
}

/// Issue both catalog requests together and wait for both to settle.
// Browser fetch futures are `!Send`; the trait is `?Send` to match.
#[allow(clippy::future_not_send)]
pub async fn load_catalog<S>(source: &S) -> CatalogLoad
where
    S: CatalogSource + ?Sized,
{
    let (products, categories) = join(source.fetch_products(), source.fetch_categories()).await;
    let categories = categories.unwrap_or_else(|err| {
        warn!(error = %err, "category load failed; continuing without filter tags");
        Vec::new()
    });
    match &products {
        Ok(list) => info!(
            products = list.len(),
            categories = categories.len(),
            "catalog loaded"
        ),
        Err(err) => warn!(error = %err, "product load failed"),
    }
    CatalogLoad {
        products,
        categories,
    }
}

/// Decode a `GET /products` body.
///
/// # Errors
/// Returns [`FetchError::Decode`] when the body is not JSON at all.
pub fn decode_products(url: &str, body: &str) -> Result<Vec<Product>, FetchError> {
    let Some(items) = parse_array(url, body)? else {
        return Ok(Vec::new());
    };
    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Product>(item) {
            Ok(product) if seen.insert(product.id) => products.push(product),
            Ok(product) => {
                warn!(index, product_id = %product.id, "dropping duplicate product id");
            }
            Err(err) => warn!(index, error = %err, "skipping undecodable product"),
        }
    }
    Ok(products)
}

/// Decode a `GET /products/categories` body.
///
/// # Errors
/// Returns [`FetchError::Decode`] when the body is not JSON at all.
pub fn decode_categories(url: &str, body: &str) -> Result<Vec<Category>, FetchError> {
    let Some(items) = parse_array(url, body)? else {
        return Ok(Vec::new());
    };
    let mut categories: Vec<Category> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(label) => {
                let category = Category::new(label);
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
            other => debug!(value = %other, "skipping non-string category"),
        }
    }
    Ok(categories)
}

fn parse_array(url: &str, body: &str) -> Result<Option<Vec<Value>>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|err| FetchError::Decode {
        url: url.to_string(),
        detail: err.to_string(),
    })?;
    if let Value::Array(items) = value {
        Ok(Some(items))
    } else {
        warn!(url, "catalog payload is not an array; treating as empty");
        Ok(None)
    }
}
