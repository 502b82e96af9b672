//! HTTP client for the EPROLO-style dropshipping catalog/order API.
//!
//! EPROLO authenticates with a bearer token and takes free-text query
//! parameters (`search`, `page`, `limit`) rather than structured bodies.
//! There is no application-level status envelope; HTTP status alone decides
//! success.

mod normalize;
mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use storeforge_core::{CanonicalProduct, SearchResult, SupplierCategory};

use crate::client::{
    parse_base_url, retry_after_secs, OrderConfirmation, OrderRequest, SearchQuery, SupplierClient,
};
use crate::error::SupplierError;
use crate::normalize::lenient_id;

use self::normalize::normalize_product;
use self::types::{EproloCategory, EproloProduct, EproloSearchResponse};

pub const EPROLO_SUPPLIER_NAME: &str = "EPROLO";

const DEFAULT_BASE_URL: &str = "https://api.eprolo.com/api/v1";

/// Client for the EPROLO catalog and order API.
///
/// Same shape as [`crate::CjClient`]: fixed credential, pooled HTTP client,
/// no other state. [`EproloClient::with_base_url`] points it at a mock
/// server in tests.
pub struct EproloClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl EproloClient {
    /// Creates a client pointed at the production EPROLO API. A `None`
    /// credential defers failure to per-call `Config` errors.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SupplierError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SupplierError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SupplierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: parse_base_url(base_url)?,
        })
    }

    fn key(&self) -> Result<&str, SupplierError> {
        self.api_key.as_deref().ok_or(SupplierError::Config {
            supplier: EPROLO_SUPPLIER_NAME,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SupplierError> {
        self.base_url
            .join(path)
            .map_err(|e| SupplierError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Asserts a successful HTTP status and parses the body, mapping 429 to
    /// `RateLimited` and other failures to `Upstream` with the body's
    /// `message` when one exists.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, SupplierError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SupplierError::RateLimited {
                supplier: EPROLO_SUPPLIER_NAME,
                retry_after_secs: retry_after_secs(&response),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(SupplierError::Upstream {
                supplier: EPROLO_SUPPLIER_NAME,
                status: status.as_u16(),
                message: upstream_message(&body)
                    .unwrap_or_else(|| format!("request failed with status {status}")),
            });
        }

        serde_json::from_str(&body).map_err(|e| SupplierError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

#[async_trait]
impl SupplierClient for EproloClient {
    fn supplier_name(&self) -> &'static str {
        EPROLO_SUPPLIER_NAME
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SupplierError> {
        let key = self.key()?;

        // EPROLO search is free-text only; a category filter has no
        // upstream equivalent and is ignored.
        let response = self
            .client
            .get(self.endpoint("products/search")?)
            .bearer_auth(key)
            .query(&[
                ("search", query.keyword.as_str()),
                ("page", &query.page.to_string()),
                ("limit", &query.page_size.to_string()),
            ])
            .send()
            .await?;

        let payload: EproloSearchResponse = Self::read_json(
            response,
            &format!("products/search(search={})", query.keyword),
        )
        .await?;

        let items: Vec<CanonicalProduct> = payload
            .products
            .into_iter()
            .take(query.page_size as usize)
            .map(normalize_product)
            .collect();

        Ok(SearchResult::paged(
            items,
            payload.total,
            query.page,
            query.page_size,
        ))
    }

    async fn get_details(&self, product_id: &str) -> Result<CanonicalProduct, SupplierError> {
        let key = self.key()?;

        let response = self
            .client
            .get(self.endpoint(&format!("products/{product_id}"))?)
            .bearer_auth(key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SupplierError::NotFound {
                supplier: EPROLO_SUPPLIER_NAME,
                product_id: product_id.to_owned(),
            });
        }

        let raw: EproloProduct =
            Self::read_json(response, &format!("products/{product_id}")).await?;
        Ok(normalize_product(raw))
    }

    async fn create_order(
        &self,
        payload: &OrderRequest,
    ) -> Result<OrderConfirmation, SupplierError> {
        let key = self.key()?;

        let response = self
            .client
            .post(self.endpoint("orders")?)
            .bearer_auth(key)
            .json(payload)
            .send()
            .await?;

        // Pure forward: the confirmation structure is the supplier's own.
        Self::read_json(response, "orders").await
    }

    async fn categories(&self) -> Result<Vec<SupplierCategory>, SupplierError> {
        let key = self.key()?;

        let response = self
            .client
            .get(self.endpoint("categories")?)
            .bearer_auth(key)
            .send()
            .await?;

        let raw: Vec<EproloCategory> = Self::read_json(response, "categories").await?;

        Ok(raw
            .into_iter()
            .filter_map(|c| {
                let id = lenient_id(&c.id)?;
                Some(SupplierCategory {
                    id,
                    name: c.name.unwrap_or_default(),
                })
            })
            .collect())
    }
}
