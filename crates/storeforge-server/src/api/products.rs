use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use storeforge_core::{CanonicalProduct, SearchResult};
use storeforge_suppliers::{SearchService, SupplierClient};

use crate::middleware::RequestId;

use super::{map_supplier_error, ApiError, AppState, Envelope};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    keyword: Option<String>,
    category_id: Option<String>,
    /// Kept as raw strings so junk like `page=zero` coerces to the default
    /// instead of failing extraction.
    page: Option<String>,
    page_size: Option<String>,
    supplier: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SupplierParam {
    supplier: Option<String>,
}

fn lenient_u32(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// `GET /api/v1/products` — paged catalog search against one supplier.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Envelope<SearchResult>>, ApiError> {
    let client = state
        .registry
        .resolve(params.supplier.as_deref())
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    let service = SearchService::new(client);
    let result = service
        .search(
            params.keyword.as_deref().unwrap_or(""),
            params.category_id.as_deref(),
            lenient_u32(params.page.as_deref()),
            lenient_u32(params.page_size.as_deref()),
        )
        .await
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    Ok(Json(Envelope::ok(result)))
}

/// `GET /api/v1/products/{product_id}` — full detail for one product.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<String>,
    Query(params): Query<SupplierParam>,
) -> Result<Json<Envelope<CanonicalProduct>>, ApiError> {
    if product_id.trim().is_empty() {
        return Err(ApiError::validation("product id must not be blank"));
    }

    let client = state
        .registry
        .resolve(params.supplier.as_deref())
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    let product = client
        .get_details(&product_id)
        .await
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    Ok(Json(Envelope::ok(product)))
}
