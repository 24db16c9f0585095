//! HTTP client for the remote catalog API.

use async_trait::async_trait;
use gloo_net::http::Request;
use storefront_models::{Category, Product};

use crate::core::config::StorefrontConfig;
use crate::core::error::FetchError;
use crate::features::catalog::source::{CatalogSource, decode_categories, decode_products};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    products_url: String,
    categories_url: String,
}

impl ApiClient {
    pub(crate) fn new(config: &StorefrontConfig) -> Self {
        Self {
            products_url: config.products_url(),
            categories_url: config.categories_url(),
        }
    }

    async fn get_text(url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network {
                url: url.to_string(),
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(|err| FetchError::Network {
            url: url.to_string(),
            detail: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl CatalogSource for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let body = Self::get_text(&self.products_url).await?;
        decode_products(&self.products_url, &body)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let body = Self::get_text(&self.categories_url).await?;
        decode_categories(&self.categories_url, &body)
    }
}
