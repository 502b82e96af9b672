//! HTTP client for the CJ-style dropshipping catalog/order API.
//!
//! CJ authenticates with a `CJ-Access-Token` header and takes structured
//! JSON bodies (separate keyword/category/page fields). Every response is
//! wrapped in an envelope whose application-level `code` can signal failure
//! even under HTTP 200; [`CjClient`] surfaces that as
//! [`SupplierError::Upstream`].

mod normalize;
mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use storeforge_core::{CanonicalProduct, SearchResult, SupplierCategory};

use crate::client::{
    parse_base_url, retry_after_secs, OrderConfirmation, OrderRequest, SearchQuery, SupplierClient,
};
use crate::error::SupplierError;
use crate::normalize::lenient_id;

use self::normalize::normalize_product;
use self::types::{CjCategory, CjEnvelope, CjProduct, CjProductPage};

pub const CJ_SUPPLIER_NAME: &str = "CJ Dropshipping";

const DEFAULT_BASE_URL: &str = "https://developers.cjdropshipping.com/api2.0/v1";
const TOKEN_HEADER: &str = "CJ-Access-Token";

/// Client for the CJ catalog and order API.
///
/// Holds the fixed credential and a pooled `reqwest::Client`; no other
/// state, so one instance can serve any number of concurrent calls. Use
/// [`CjClient::with_base_url`] to point at a mock server in tests.
pub struct CjClient {
    client: Client,
    access_token: Option<String>,
    base_url: Url,
}

impl CjClient {
    /// Creates a client pointed at the production CJ API.
    ///
    /// `access_token` may be `None`: construction still succeeds and every
    /// operation reports [`SupplierError::Config`] instead, so a deployment
    /// without CJ credentials degrades per-call rather than at startup.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        access_token: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SupplierError> {
        Self::with_base_url(access_token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SupplierError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        access_token: Option<String>,
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
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// The configured credential, or [`SupplierError::Config`] before any
    /// network call is made.
    fn token(&self) -> Result<&str, SupplierError> {
        self.access_token.as_deref().ok_or(SupplierError::Config {
            supplier: CJ_SUPPLIER_NAME,
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

    /// Reads an HTTP response into the CJ envelope, mapping HTTP-level and
    /// application-level failures to typed errors, and returns the `data`
    /// payload (absent on some success responses).
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<Option<T>, SupplierError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SupplierError::RateLimited {
                supplier: CJ_SUPPLIER_NAME,
                retry_after_secs: retry_after_secs(&response),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(SupplierError::Upstream {
                supplier: CJ_SUPPLIER_NAME,
                status: status.as_u16(),
                message: upstream_message(&body)
                    .unwrap_or_else(|| format!("request failed with status {status}")),
            });
        }

        let envelope: CjEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| SupplierError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        if let Some(code) = envelope.code {
            if code != 200 {
                tracing::warn!(code, context, "CJ reported application-level failure");
                return Err(SupplierError::Upstream {
                    supplier: CJ_SUPPLIER_NAME,
                    status: status.as_u16(),
                    message: envelope
                        .message
                        .unwrap_or_else(|| format!("application status code {code}")),
                });
            }
        }

        Ok(envelope.data)
    }
}

/// Best-effort extraction of the upstream's own `message` field from an
/// error body, so failures surface CJ's text instead of a generic one.
fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

#[async_trait]
impl SupplierClient for CjClient {
    fn supplier_name(&self) -> &'static str {
        CJ_SUPPLIER_NAME
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SupplierError> {
        let token = self.token()?;

        let mut body = json!({
            "keyword": query.keyword,
            "pageNum": query.page,
            "pageSize": query.page_size,
        });
        if let Some(category_id) = query.category_id.as_deref().filter(|c| !c.is_empty()) {
            body["categoryId"] = json!(category_id);
        }

        let response = self
            .client
            .post(self.endpoint("product/list")?)
            .header(TOKEN_HEADER, token)
            .json(&body)
            .send()
            .await?;

        let page: CjProductPage = Self::read_envelope(
            response,
            &format!("product/list(keyword={})", query.keyword),
        )
        .await?
        .unwrap_or_default();

        // Upstream occasionally returns more rows than asked for; the page
        // contract is what the caller requested.
        let items: Vec<CanonicalProduct> = page
            .list
            .into_iter()
            .take(query.page_size as usize)
            .map(normalize_product)
            .collect();

        Ok(SearchResult::paged(
            items,
            page.total,
            query.page,
            query.page_size,
        ))
    }

    async fn get_details(&self, product_id: &str) -> Result<CanonicalProduct, SupplierError> {
        let token = self.token()?;

        let response = self
            .client
            .post(self.endpoint("product/query")?)
            .header(TOKEN_HEADER, token)
            .json(&json!({ "pid": product_id }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SupplierError::NotFound {
                supplier: CJ_SUPPLIER_NAME,
                product_id: product_id.to_owned(),
            });
        }

        let raw: Option<CjProduct> =
            Self::read_envelope(response, &format!("product/query(pid={product_id})")).await?;

        let raw = raw.ok_or_else(|| SupplierError::NotFound {
            supplier: CJ_SUPPLIER_NAME,
            product_id: product_id.to_owned(),
        })?;

        Ok(normalize_product(raw))
    }

    async fn create_order(
        &self,
        payload: &OrderRequest,
    ) -> Result<OrderConfirmation, SupplierError> {
        let token = self.token()?;

        let response = self
            .client
            .post(self.endpoint("shopping/order/createOrder")?)
            .header(TOKEN_HEADER, token)
            .json(payload)
            .send()
            .await?;

        // The confirmation is opaque: validate the envelope, return its
        // payload unreshaped.
        let confirmation: Option<serde_json::Value> =
            Self::read_envelope(response, "shopping/order/createOrder").await?;
        Ok(confirmation.unwrap_or(serde_json::Value::Null))
    }

    async fn categories(&self) -> Result<Vec<SupplierCategory>, SupplierError> {
        let token = self.token()?;

        let response = self
            .client
            .get(self.endpoint("product/getCategory")?)
            .header(TOKEN_HEADER, token)
            .send()
            .await?;

        let raw: Vec<CjCategory> = Self::read_envelope(response, "product/getCategory")
            .await?
            .unwrap_or_default();

        // Entries without a usable id are skipped rather than failing the
        // whole listing.
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
