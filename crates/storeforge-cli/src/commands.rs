//! Command handlers for the CLI.
//!
//! Each handler resolves its supplier client up front in `main`, performs
//! one operation, and prints a human-readable summary. Supplier errors
//! propagate to `main` and surface through anyhow.

use std::sync::Arc;

use storeforge_core::CanonicalProduct;
use storeforge_suppliers::{OrderService, SearchService, SupplierClient};

fn print_product_line(product: &CanonicalProduct) {
    println!(
        "{}  {}  price {} (cost {}, profit {})  [{}]",
        product.id,
        product.title,
        product.sell_price,
        product.cost_price,
        product.derived_profit,
        product.category,
    );
}

pub(crate) async fn run_search(
    client: Arc<dyn SupplierClient>,
    keyword: &str,
    category: Option<&str>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> anyhow::Result<()> {
    let supplier = client.supplier_name();
    let service = SearchService::new(client);
    let result = service.search(keyword, category, page, page_size).await?;

    println!(
        "{supplier}: {} of {} products (page {}, page size {}){}",
        result.items.len(),
        result.total_count,
        result.page,
        result.page_size,
        if result.has_more { ", more available" } else { "" },
    );
    for product in &result.items {
        print_product_line(product);
    }

    Ok(())
}

pub(crate) async fn run_show(
    client: Arc<dyn SupplierClient>,
    product_id: &str,
) -> anyhow::Result<()> {
    let product = client.get_details(product_id).await?;

    println!("{} — {}", product.id, product.title);
    println!("supplier:  {}", product.supplier_name);
    println!("category:  {}", product.category);
    println!(
        "pricing:   sell {} / cost {} / profit {}",
        product.sell_price, product.cost_price, product.derived_profit
    );
    if let Some(sku) = &product.sku {
        println!("sku:       {sku}");
    }
    println!(
        "shipping:  {} ({})",
        if product.shipping.is_free_shipping {
            "free"
        } else {
            "paid"
        },
        product.shipping.estimated_delivery_time,
    );
    if let Some(image) = &product.primary_image {
        println!("image:     {image}");
    }
    for image in &product.additional_images {
        println!("           {image}");
    }
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    Ok(())
}

pub(crate) async fn run_categories(client: Arc<dyn SupplierClient>) -> anyhow::Result<()> {
    let supplier = client.supplier_name();
    let categories = client.categories().await?;

    println!("{supplier}: {} categories", categories.len());
    for category in &categories {
        println!("{}  {}", category.id, category.name);
    }

    Ok(())
}

pub(crate) async fn run_order(
    client: Arc<dyn SupplierClient>,
    payload_path: &std::path::Path,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(payload_path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", payload_path.display()))?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid order JSON: {e}"))?;
    if !payload.is_object() {
        anyhow::bail!("order payload must be a JSON object");
    }

    let service = OrderService::new(client);
    let confirmation = service.submit(&payload).await?;

    println!("{}", serde_json::to_string_pretty(&confirmation)?);
    Ok(())
}
