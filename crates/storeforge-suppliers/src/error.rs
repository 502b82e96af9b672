use thiserror::Error;

/// Errors surfaced by the supplier client layer.
///
/// `Config` is detected before any network call and must not be retried.
/// Everything else is an upstream-or-transport failure surfaced immediately;
/// retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum SupplierError {
    /// Required supplier credential is absent from configuration.
    #[error("{supplier} credentials are not configured")]
    Config { supplier: &'static str },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream HTTP 429. Only reported, never retried here.
    #[error("rate limited by {supplier} (retry after {retry_after_secs}s)")]
    RateLimited {
        supplier: &'static str,
        retry_after_secs: u64,
    },

    /// A detail fetch for an id the supplier does not know.
    #[error("{supplier} has no product with id {product_id}")]
    NotFound {
        supplier: &'static str,
        product_id: String,
    },

    /// Non-success HTTP status, or an application-level failure code embedded
    /// in an otherwise-200 body. `message` carries the upstream's own text
    /// when it gave one.
    #[error("{supplier} API error (HTTP {status}): {message}")]
    Upstream {
        supplier: &'static str,
        status: u16,
        message: String,
    },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured base URL that `reqwest::Url` cannot parse.
    #[error("invalid supplier base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A supplier name the registry does not recognize.
    #[error("unknown supplier: {0}")]
    UnknownSupplier(String),
}
