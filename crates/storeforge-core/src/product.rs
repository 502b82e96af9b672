use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category sentinel used when the upstream record carries no category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Delivery-time sentinel used when the upstream record carries no estimate.
pub const UNKNOWN_DELIVERY_TIME: &str = "N/A";

/// A product sourced from a supplier catalog, normalized into the
/// supplier-agnostic shape the rest of the application works with.
///
/// Instances are constructed fresh on every search or detail call and are
/// transient: nothing in this layer caches or persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProduct {
    /// Supplier-scoped product identifier, stored as a string because the
    /// upstreams disagree on id types (CJ uses strings, EPROLO numbers).
    pub id: String,
    pub title: String,
    /// May be empty; never absent.
    pub description: String,
    /// Supplier's suggested resale price. Defaults to 0 when the upstream
    /// field is missing or unparsable.
    pub sell_price: Decimal,
    /// Supplier's wholesale price. Same defaulting rule as `sell_price`.
    pub cost_price: Decimal,
    pub primary_image: Option<String>,
    /// Ordered gallery beyond the primary image: deduplicated, never
    /// containing the primary, capped at a small fixed count.
    pub additional_images: Vec<String>,
    /// Falls back to [`DEFAULT_CATEGORY`] when the supplier gives none.
    pub category: String,
    pub sku: Option<String>,
    /// Constant identifying the source, e.g. `"CJ Dropshipping"`.
    pub supplier_name: String,
    pub shipping: ShippingInfo,
    /// Always recomputed from the two price fields via [`derived_profit`];
    /// never carried over from upstream.
    pub derived_profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub is_free_shipping: bool,
    pub estimated_delivery_time: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            is_free_shipping: false,
            estimated_delivery_time: UNKNOWN_DELIVERY_TIME.to_string(),
        }
    }
}

/// Margin between resale and wholesale price, fixed to two decimal places.
#[must_use]
pub fn derived_profit(sell_price: Decimal, cost_price: Decimal) -> Decimal {
    (sell_price - cost_price).round_dp(2)
}

/// One page of canonical products plus the pagination state the caller
/// needs to drive "next page" controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<CanonicalProduct>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    /// Invariant: `total_count > page * page_size`.
    pub has_more: bool,
}

impl SearchResult {
    /// Builds a result page, computing `has_more` from the totals.
    #[must_use]
    pub fn paged(items: Vec<CanonicalProduct>, total_count: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page,
            page_size,
            has_more: total_count > u64::from(page) * u64::from(page_size),
        }
    }

    /// A well-formed empty page. An empty catalog match is success, not an
    /// error.
    #[must_use]
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self::paged(Vec::new(), 0, page, page_size)
    }

    /// Re-stamps the page/page-size a caller asked for and recomputes
    /// `has_more` to keep the invariant. Used by the search service so
    /// callers see their own pagination inputs, not values possibly
    /// corrected by the upstream.
    #[must_use]
    pub fn with_requested_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self.has_more = self.total_count > u64::from(page) * u64::from(page_size);
        self
    }
}

/// A supplier catalog category, as flat `{id, name}` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierCategory {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("test decimal literal")
    }

    fn make_product(sell: &str, cost: &str) -> CanonicalProduct {
        let sell = dec(sell);
        let cost = dec(cost);
        CanonicalProduct {
            id: "p-1".to_string(),
            title: "Wireless Earbuds".to_string(),
            description: String::new(),
            sell_price: sell,
            cost_price: cost,
            primary_image: Some("https://cdn.example.com/main.jpg".to_string()),
            additional_images: vec!["https://cdn.example.com/alt.jpg".to_string()],
            category: DEFAULT_CATEGORY.to_string(),
            sku: None,
            supplier_name: "CJ Dropshipping".to_string(),
            shipping: ShippingInfo::default(),
            derived_profit: derived_profit(sell, cost),
        }
    }

    #[test]
    fn derived_profit_is_difference_rounded_to_two_places() {
        assert_eq!(derived_profit(dec("19.99"), dec("7.50")), dec("12.49"));
        assert_eq!(derived_profit(dec("10.005"), dec("0")), dec("10.00"));
    }

    #[test]
    fn derived_profit_can_be_negative_when_cost_exceeds_sell() {
        assert_eq!(derived_profit(dec("5.00"), dec("7.25")), dec("-2.25"));
    }

    #[test]
    fn paged_sets_has_more_when_total_exceeds_window() {
        let result = SearchResult::paged(vec![], 45, 1, 12);
        assert!(result.has_more);
    }

    #[test]
    fn paged_clears_has_more_on_last_page() {
        let result = SearchResult::paged(vec![], 45, 4, 12);
        assert!(!result.has_more);
    }

    #[test]
    fn paged_exact_boundary_is_not_more() {
        // total == page * page_size means the window is exhausted.
        let result = SearchResult::paged(vec![], 24, 2, 12);
        assert!(!result.has_more);
    }

    #[test]
    fn empty_result_has_no_items_and_no_more() {
        let result = SearchResult::empty(1, 20);
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 0);
        assert!(!result.has_more);
    }

    #[test]
    fn with_requested_page_restores_caller_pagination() {
        // Upstream "corrected" the page to 1; the caller asked for page 3.
        let result = SearchResult::paged(vec![], 100, 1, 20).with_requested_page(3, 20);
        assert_eq!(result.page, 3);
        assert_eq!(result.page_size, 20);
        assert!(result.has_more);

        let last = SearchResult::paged(vec![], 100, 1, 20).with_requested_page(5, 20);
        assert!(!last.has_more);
    }

    #[test]
    fn shipping_defaults_to_unknown_delivery() {
        let shipping = ShippingInfo::default();
        assert!(!shipping.is_free_shipping);
        assert_eq!(shipping.estimated_delivery_time, UNKNOWN_DELIVERY_TIME);
    }

    #[test]
    fn canonical_product_serializes_camel_case() {
        let product = make_product("19.99", "7.50");
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["sellPrice"].as_str(), Some("19.99"));
        assert_eq!(json["costPrice"].as_str(), Some("7.50"));
        assert_eq!(json["derivedProfit"].as_str(), Some("12.49"));
        assert!(json["shipping"]["isFreeShipping"].is_boolean());
        assert_eq!(
            json["shipping"]["estimatedDeliveryTime"].as_str(),
            Some("N/A")
        );
    }

    #[test]
    fn search_result_serde_roundtrip() {
        let result = SearchResult::paged(vec![make_product("12.00", "4.00")], 45, 1, 12);
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.total_count, 45);
        assert_eq!(decoded.items.len(), 1);
        assert!(decoded.has_more);
        assert_eq!(decoded.items[0].id, "p-1");
    }
}
