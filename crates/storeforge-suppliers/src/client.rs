use async_trait::async_trait;

use storeforge_core::{CanonicalProduct, SearchResult, SupplierCategory};

use crate::error::SupplierError;

/// Order payloads are opaque pass-throughs: this layer performs no business
/// validation of order contents and returns whatever confirmation structure
/// the supplier returns.
pub type OrderRequest = serde_json::Value;
pub type OrderConfirmation = serde_json::Value;

/// Catalog search parameters, already coerced to valid values by the caller
/// (see [`crate::SearchService`]).
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    /// Ignored by suppliers whose search is free-text only.
    pub category_id: Option<String>,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
}

/// The capability set every supplier integration provides.
///
/// Implementations hold a fixed credential and an HTTP client and nothing
/// else; all three data operations plus the category listing are safe to
/// call concurrently and independently.
#[async_trait]
pub trait SupplierClient: Send + Sync {
    /// Constant identifying the source, e.g. `"CJ Dropshipping"`.
    fn supplier_name(&self) -> &'static str;

    /// One page of catalog matches, normalized. A well-formed empty result
    /// is `Ok` with an empty item list, never an error.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SupplierError>;

    /// Full record for a single product id.
    ///
    /// # Errors
    ///
    /// [`SupplierError::NotFound`] when the id does not resolve upstream.
    async fn get_details(&self, product_id: &str) -> Result<CanonicalProduct, SupplierError>;

    /// Pure forward of an order payload to the supplier's order-creation
    /// endpoint. Does not retry and does not partially apply.
    async fn create_order(
        &self,
        payload: &OrderRequest,
    ) -> Result<OrderConfirmation, SupplierError>;

    /// The supplier's category tree, flattened to `{id, name}` pairs.
    async fn categories(&self) -> Result<Vec<SupplierCategory>, SupplierError>;
}

/// Seconds to report in a rate-limit error, from the `Retry-After` header
/// when parsable, else a 60s default.
pub(crate) fn retry_after_secs(response: &reqwest::Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Normalize a configured base URL: exactly one trailing slash so that
/// `Url::join` appends endpoint paths instead of replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<reqwest::Url, SupplierError> {
    let normalized = format!("{}/", base_url.trim_end_matches('/'));
    reqwest::Url::parse(&normalized).map_err(|e| SupplierError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}
