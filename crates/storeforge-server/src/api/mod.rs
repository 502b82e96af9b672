mod categories;
mod orders;
mod products;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use storeforge_suppliers::{SupplierError, SupplierRegistry};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SupplierRegistry>,
}

/// Uniform response envelope: `success` plus exactly one of `data`/`error`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// An error ready to leave the HTTP boundary: status code plus the
/// envelope's error message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Envelope::<()> {
            success: false,
            data: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Maps a supplier-layer error to its HTTP shape.
///
/// Configuration problems are the deployment's fault (500) and deliberately
/// reported with a fixed message that does not name the missing variable.
/// Anything the upstream did wrong (including rate limiting) is a bad
/// gateway, so callers can tell "our request was invalid" (4xx) apart from
/// "the supplier misbehaved" (502).
pub(super) fn map_supplier_error(request_id: &str, error: SupplierError) -> ApiError {
    match error {
        SupplierError::Config { supplier } => {
            tracing::error!(
                request_id,
                supplier,
                "supplier call rejected: missing credentials"
            );
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "supplier credentials are not configured",
            )
        }
        SupplierError::InvalidBaseUrl { .. } => {
            tracing::error!(request_id, error = %error, "supplier call rejected: bad base URL");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "supplier base URL is misconfigured",
            )
        }
        SupplierError::UnknownSupplier(ref name) => {
            ApiError::validation(format!("unknown supplier: {name}"))
        }
        SupplierError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, error.to_string()),
        SupplierError::RateLimited { .. } | SupplierError::Upstream { .. } => {
            tracing::warn!(request_id, error = %error, "upstream supplier failure");
            ApiError::new(StatusCode::BAD_GATEWAY, error.to_string())
        }
        SupplierError::Deserialize { ref context, .. } => {
            tracing::error!(request_id, error = %error, context, "supplier response did not parse");
            ApiError::new(
                StatusCode::BAD_GATEWAY,
                "supplier returned an unreadable response",
            )
        }
        SupplierError::Http(ref source) => {
            tracing::warn!(request_id, error = %source, "supplier request failed in transport");
            ApiError::new(StatusCode::BAD_GATEWAY, "could not reach supplier")
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(Envelope::ok(HealthData { status: "ok" }))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{product_id}", get(products::get_product))
        .route("/api/v1/orders", post(orders::submit_order))
        .route("/api/v1/categories", get(categories::list_categories))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
