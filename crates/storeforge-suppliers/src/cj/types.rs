//! Raw response types for the CJ-style catalog API.
//!
//! CJ wraps every response in an envelope with an application-level `code`
//! that signals failure even when the HTTP status is 200 (observed: a
//! non-200 `code` alongside HTTP 200). Prices arrive as decimal strings.

use serde::Deserialize;

/// Top-level CJ envelope around every endpoint's payload.
///
/// The fields stay plain `Option`s with no serde defaulting: a `default`
/// attribute on `data` would put a `T: Default` bound on the derived
/// `Deserialize` impl, which payload types like [`CjProduct`] do not carry.
#[derive(Debug, Deserialize)]
pub(crate) struct CjEnvelope<T> {
    /// Application-level status. `200` is success; anything else is a
    /// failure regardless of the HTTP status. Absent on some legacy
    /// endpoints, which is treated as success.
    pub code: Option<i64>,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Payload of `POST product/list`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CjProductPage {
    #[serde(default)]
    pub list: Vec<CjProduct>,
    #[serde(default)]
    pub total: u64,
}

/// A single raw catalog item from CJ.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CjProduct {
    /// Product id; a string in current API versions but tolerated as a
    /// number.
    #[serde(default)]
    pub pid: serde_json::Value,
    /// English display name, preferred over `product_name`.
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Suggested resale price, usually a decimal string like `"12.99"`.
    #[serde(default)]
    pub sell_price: serde_json::Value,
    /// Wholesale price.
    #[serde(default)]
    pub product_price_original: serde_json::Value,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default)]
    pub product_images: Vec<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(default)]
    pub is_free_shipping: bool,
    #[serde(default)]
    pub deliver_time: Option<String>,
}

/// One entry of `GET product/getCategory`, flattened.
#[derive(Debug, Deserialize)]
pub(crate) struct CjCategory {
    #[serde(default, alias = "categoryId")]
    pub id: serde_json::Value,
    #[serde(default, alias = "categoryName")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // CjProduct has no Default impl, so this only compiles while the
    // envelope derive puts no Default bound on its payload type.
    #[test]
    fn envelope_parses_around_non_default_payload() {
        let envelope: CjEnvelope<CjProduct> =
            serde_json::from_value(json!({"code": 200, "data": {"pid": "p-1"}}))
                .expect("envelope deserializes");
        assert_eq!(envelope.code, Some(200));
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_some());
    }

    #[test]
    fn envelope_missing_fields_are_absent() {
        let envelope: CjEnvelope<CjProduct> =
            serde_json::from_value(json!({})).expect("empty envelope deserializes");
        assert!(envelope.code.is_none());
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }
}
