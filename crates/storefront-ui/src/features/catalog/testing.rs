//! Scripted catalog source shared by the catalog and render tests.

use async_trait::async_trait;
use storefront_models::{Category, Product};

use crate::core::error::FetchError;
use crate::features::catalog::source::CatalogSource;

/// [`CatalogSource`] returning canned results.
pub struct ScriptedSource {
    /// Result returned by `fetch_products`.
    pub products: Result<Vec<Product>, FetchError>,
    /// Result returned by `fetch_categories`.
    pub categories: Result<Vec<Category>, FetchError>,
}

impl ScriptedSource {
    /// Source where both requests succeed.
    #[must_use]
    pub fn ok(products: Vec<Product>, categories: &[&str]) -> Self {
        Self {
            products: Ok(products),
            categories: Ok(categories.iter().copied().map(Category::from).collect()),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for ScriptedSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.products.clone()
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.categories.clone()
    }
}

/// Non-success status error for the products endpoint.
#[must_use]
pub fn status_error(status: u16) -> FetchError {
    FetchError::Status {
        url: "https://fakestoreapi.com/products".to_string(),
        status,
    }
}
