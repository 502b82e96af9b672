//! Normalization from raw EPROLO shapes to the canonical product.
//!
//! EPROLO's catalog is narrower than CJ's: no wholesale price, no shipping
//! metadata, frequently no category. The canonical defaulting rules fill
//! those gaps (cost 0, category "General", shipping unknown).

use storeforge_core::{
    derived_profit, CanonicalProduct, ShippingInfo, DEFAULT_CATEGORY,
};

use crate::eprolo::types::EproloProduct;
use crate::eprolo::EPROLO_SUPPLIER_NAME;
use crate::normalize::{additional_images, lenient_id, lenient_price, non_blank};

/// Maps one raw EPROLO catalog item into a [`CanonicalProduct`]. Never
/// fails; malformed fields fall back per the canonical defaulting rules.
pub(crate) fn normalize_product(raw: EproloProduct) -> CanonicalProduct {
    let sell_price = lenient_price(&raw.price);
    // EPROLO does not expose a wholesale price; the canonical default
    // applies, which makes derived profit equal to the sell price.
    let cost_price = rust_decimal::Decimal::ZERO;

    let primary_image = non_blank(raw.image).or_else(|| non_blank(raw.main_image));
    let additional_images = additional_images(primary_image.as_deref(), &raw.images);

    CanonicalProduct {
        id: lenient_id(&raw.id).unwrap_or_default(),
        title: non_blank(raw.name).unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        sell_price,
        cost_price,
        primary_image,
        additional_images,
        category: non_blank(raw.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        sku: non_blank(raw.sku),
        supplier_name: EPROLO_SUPPLIER_NAME.to_string(),
        shipping: ShippingInfo::default(),
        derived_profit: derived_profit(sell_price, cost_price),
    }
}
