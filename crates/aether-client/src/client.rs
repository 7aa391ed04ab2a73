//! HTTP client for the catalog endpoint.

use std::time::Duration;

use aether_core::{AppConfig, Category, CategorySelection, Product};
use reqwest::Client;

use crate::cache::RevalidationCache;
use crate::error::ClientError;

/// Cards shown on a category listing page.
pub const LISTING_COUNT: usize = 12;

/// Batch size fetched when looking a product up by slug. Larger batches make a
/// match more likely, since every batch is freshly generated.
pub const DETAIL_BATCH_COUNT: usize = 100;

pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(3600);

/// Fetches product batches from `<base_url>/api/products`.
///
/// Responses are cached per request URL for the revalidation window. Upstream
/// failures are returned as typed errors without retrying.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    cache: RevalidationCache<Vec<Product>>,
}

impl CatalogClient {
    /// Creates a client for `base_url` (a trailing `/` is ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        revalidate: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aether-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: RevalidationCache::new(revalidate),
        })
    }

    /// Creates a client from the site URL, timeout and revalidation window in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.site_url, config.client_timeout(), config.revalidate())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self, count: usize, selection: CategorySelection) -> String {
        format!(
            "{}/api/products?category={}&count={count}",
            self.base_url,
            selection.as_query_value()
        )
    }

    /// Fetches `count` products for `selection`, serving from the cache while
    /// the previous response for the same URL is still fresh.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`]: network or TLS failure, or timeout.
    /// - [`ClientError::UnexpectedStatus`]: any non-2xx response.
    /// - [`ClientError::Deserialize`]: the body is not a product array.
    pub async fn fetch_products(
        &self,
        count: usize,
        selection: CategorySelection,
    ) -> Result<Vec<Product>, ClientError> {
        let url = self.products_url(count, selection);

        if let Some(products) = self.cache.get(&url).await {
            tracing::debug!(%url, "catalog cache hit");
            return Ok(products);
        }

        tracing::debug!(%url, "fetching catalog batch");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|source| ClientError::Deserialize {
                context: url.clone(),
                source,
            })?;

        self.cache.insert(url, products.clone()).await;
        Ok(products)
    }

    /// Listing page data: [`LISTING_COUNT`] products of one category.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CatalogClient::fetch_products`].
    pub async fn listing(&self, category: Category) -> Result<Vec<Product>, ClientError> {
        self.fetch_products(LISTING_COUNT, CategorySelection::Only(category))
            .await
    }

    /// Detail page data: the first product in a mixed batch whose slug matches.
    ///
    /// # Errors
    ///
    /// - [`ClientError::ProductNotFound`]: no record in the batch has `slug`.
    /// - Any error from [`CatalogClient::fetch_products`].
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, ClientError> {
        self.fetch_products(DETAIL_BATCH_COUNT, CategorySelection::Mixed)
            .await?
            .into_iter()
            .find(|product| product.matches_slug(slug))
            .ok_or_else(|| ClientError::ProductNotFound {
                slug: slug.to_string(),
            })
    }
}
