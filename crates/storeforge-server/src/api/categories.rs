use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use storeforge_core::SupplierCategory;
use storeforge_suppliers::SupplierClient;

use crate::middleware::RequestId;

use super::{map_supplier_error, ApiError, AppState, Envelope};

#[derive(Debug, Deserialize)]
pub(super) struct CategoryParams {
    supplier: Option<String>,
}

/// `GET /api/v1/categories` — the supplier's catalog categories as flat
/// `{id, name}` pairs.
pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<Envelope<Vec<SupplierCategory>>>, ApiError> {
    let client = state
        .registry
        .resolve(params.supplier.as_deref())
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    let categories = client
        .categories()
        .await
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    Ok(Json(Envelope::ok(categories)))
}
