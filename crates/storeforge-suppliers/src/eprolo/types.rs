//! Raw response types for the EPROLO-style catalog API.
//!
//! EPROLO has no application-level status envelope: HTTP status is the
//! whole truth. Ids arrive as numbers or strings depending on endpoint
//! version, prices as either numbers or decimal strings.

use serde::Deserialize;

/// Response of `GET products/search`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EproloSearchResponse {
    #[serde(default)]
    pub products: Vec<EproloProduct>,
    /// EPROLO also reports `page`/`total_pages`; pagination is recomputed
    /// canonically from `total`, so those fields are not modeled.
    #[serde(default)]
    pub total: u64,
}

/// A single raw catalog item from EPROLO.
#[derive(Debug, Deserialize)]
pub(crate) struct EproloProduct {
    /// Numeric in current responses, string in older ones.
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    /// Wholesale-inclusive resale price; EPROLO exposes a single price.
    #[serde(default)]
    pub price: serde_json::Value,
    #[serde(default)]
    pub image: Option<String>,
    /// Fallback field name used by some endpoint versions.
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// One entry of `GET categories`.
#[derive(Debug, Deserialize)]
pub(crate) struct EproloCategory {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
}
