//! Thin orchestration over the supplier clients: pagination coercion for
//! search, pass-through for order submission, and configuration-driven
//! client selection.

use std::str::FromStr;
use std::sync::Arc;

use storeforge_core::{AppConfig, SearchResult};

use crate::cj::CjClient;
use crate::client::{OrderConfirmation, OrderRequest, SearchQuery, SupplierClient};
use crate::eprolo::EproloClient;
use crate::error::SupplierError;

/// Page used when the caller's input is missing or invalid.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller's input is missing or invalid.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The supplier integrations this deployment knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierKind {
    Cj,
    Eprolo,
}

impl FromStr for SupplierKind {
    type Err = SupplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cj" => Ok(Self::Cj),
            "eprolo" => Ok(Self::Eprolo),
            other => Err(SupplierError::UnknownSupplier(other.to_owned())),
        }
    }
}

impl std::fmt::Display for SupplierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cj => write!(f, "cj"),
            Self::Eprolo => write!(f, "eprolo"),
        }
    }
}

/// Holds one explicitly constructed client per supplier, built once at
/// process start from [`AppConfig`]. Replaces the original design's global
/// singleton and call-time environment reads: callers receive a client by
/// injection and tests substitute fakes freely.
pub struct SupplierRegistry {
    cj: Arc<CjClient>,
    eprolo: Arc<EproloClient>,
    default_kind: SupplierKind,
}

impl SupplierRegistry {
    /// Builds both clients from configuration. Missing credentials do not
    /// fail here; the affected client reports `Config` per call instead.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be constructed, a base
    /// URL is invalid, or the configured default supplier name is unknown.
    pub fn from_config(config: &AppConfig) -> Result<Self, SupplierError> {
        let cj = CjClient::with_base_url(
            config.cj_access_token.clone(),
            config.supplier_timeout_secs,
            &config.supplier_user_agent,
            &config.cj_api_base,
        )?;
        let eprolo = EproloClient::with_base_url(
            config.eprolo_api_key.clone(),
            config.supplier_timeout_secs,
            &config.supplier_user_agent,
            &config.eprolo_api_base,
        )?;

        Ok(Self {
            cj: Arc::new(cj),
            eprolo: Arc::new(eprolo),
            default_kind: config.default_supplier.parse()?,
        })
    }

    #[must_use]
    pub fn default_kind(&self) -> SupplierKind {
        self.default_kind
    }

    /// The client for a supplier, falling back to the configured default.
    #[must_use]
    pub fn client(&self, kind: Option<SupplierKind>) -> Arc<dyn SupplierClient> {
        match kind.unwrap_or(self.default_kind) {
            SupplierKind::Cj => self.cj.clone(),
            SupplierKind::Eprolo => self.eprolo.clone(),
        }
    }

    /// Resolves a caller-supplied supplier name (e.g. a query parameter) to
    /// a client.
    ///
    /// # Errors
    ///
    /// [`SupplierError::UnknownSupplier`] when the name is not recognized.
    pub fn resolve(&self, name: Option<&str>) -> Result<Arc<dyn SupplierClient>, SupplierError> {
        let kind = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(SupplierKind::from_str)
            .transpose()?;
        Ok(self.client(kind))
    }
}

/// Product search over one supplier client.
///
/// Coerces invalid or missing pagination to the defaults, delegates, and
/// returns the result stamped with the page/page-size it was called with —
/// not values possibly corrected by upstream — so the caller can drive
/// "next page" controls deterministically.
pub struct SearchService {
    client: Arc<dyn SupplierClient>,
}

impl SearchService {
    #[must_use]
    pub fn new(client: Arc<dyn SupplierClient>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Propagates the supplier client's error unchanged.
    pub async fn search(
        &self,
        keyword: &str,
        category_id: Option<&str>,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<SearchResult, SupplierError> {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE);

        let query = SearchQuery {
            keyword: keyword.to_owned(),
            category_id: category_id
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ToOwned::to_owned),
            page,
            page_size,
        };

        let result = self.client.search(&query).await?;
        Ok(result.with_requested_page(page, page_size))
    }
}

/// Order submission over one supplier client.
///
/// The payload arrives already validated by the caller; this service adds
/// no wrapping semantics and surfaces supplier errors unchanged.
pub struct OrderService {
    client: Arc<dyn SupplierClient>,
}

impl OrderService {
    #[must_use]
    pub fn new(client: Arc<dyn SupplierClient>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Propagates the supplier client's error unchanged.
    pub async fn submit(&self, payload: &OrderRequest) -> Result<OrderConfirmation, SupplierError> {
        self.client.create_order(payload).await
    }
}
