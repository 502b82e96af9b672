use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use storeforge_suppliers::OrderService;

use crate::middleware::RequestId;

use super::{map_supplier_error, ApiError, AppState, Envelope};

#[derive(Debug, Deserialize)]
pub(super) struct OrderParams {
    supplier: Option<String>,
}

/// `POST /api/v1/orders` — forwards the order payload to the supplier and
/// wraps its confirmation.
///
/// The payload shape is the supplier's own; the only validation here is
/// that the body is a JSON object, so a caller mistake fails fast instead
/// of as an opaque upstream rejection. Extraction failures (absent body,
/// wrong content type, malformed JSON) are mapped into the envelope rather
/// than left to axum's plain-text rejection.
pub(super) async fn submit_order(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<OrderParams>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    let Json(payload) = payload
        .map_err(|rejection| ApiError::validation(format!("invalid order body: {rejection}")))?;
    if !payload.is_object() {
        return Err(ApiError::validation("order payload must be a JSON object"));
    }

    let client = state
        .registry
        .resolve(params.supplier.as_deref())
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    let service = OrderService::new(client);
    let confirmation = service
        .submit(&payload)
        .await
        .map_err(|e| map_supplier_error(&req_id.0, e))?;

    Ok(Json(Envelope::ok(confirmation)))
}
