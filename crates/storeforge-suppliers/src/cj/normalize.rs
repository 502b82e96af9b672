//! Normalization from raw CJ shapes to the canonical product.

use storeforge_core::{
    derived_profit, CanonicalProduct, ShippingInfo, DEFAULT_CATEGORY, UNKNOWN_DELIVERY_TIME,
};

use crate::cj::types::CjProduct;
use crate::cj::CJ_SUPPLIER_NAME;
use crate::normalize::{additional_images, lenient_id, lenient_price, non_blank};

/// Maps one raw CJ catalog item into a [`CanonicalProduct`].
///
/// Field-level tolerance: malformed prices coerce to zero, blank strings
/// become absent, missing images are dropped. This function never fails.
pub(crate) fn normalize_product(raw: CjProduct) -> CanonicalProduct {
    let sell_price = lenient_price(&raw.sell_price);
    let cost_price = lenient_price(&raw.product_price_original);

    let title = non_blank(raw.product_name_en)
        .or_else(|| non_blank(raw.product_name))
        .unwrap_or_default();

    let primary_image = non_blank(raw.product_image);
    let additional_images = additional_images(primary_image.as_deref(), &raw.product_images);

    CanonicalProduct {
        id: lenient_id(&raw.pid).unwrap_or_default(),
        title,
        description: raw.description.unwrap_or_default(),
        sell_price,
        cost_price,
        primary_image,
        additional_images,
        category: non_blank(raw.category_name).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        sku: non_blank(raw.product_sku),
        supplier_name: CJ_SUPPLIER_NAME.to_string(),
        shipping: ShippingInfo {
            is_free_shipping: raw.is_free_shipping,
            estimated_delivery_time: non_blank(raw.deliver_time)
                .unwrap_or_else(|| UNKNOWN_DELIVERY_TIME.to_string()),
        },
        derived_profit: derived_profit(sell_price, cost_price),
    }
}
