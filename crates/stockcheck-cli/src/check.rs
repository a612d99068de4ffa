//! The `check` command: resolve the requested products to SKUs, run the
//! availability checks, and print a per-store summary or JSON.

use anyhow::{anyhow, bail};
use stockcheck_core::AppConfig;
use stockcheck_fulfillment::{AvailabilityResult, StockChecker};

/// The remote service reports this quantity for stores with deep stock.
const HIGH_STOCK_QUANTITY: u32 = 9999;

pub(crate) struct CheckArgs {
    pub zip: String,
    pub products: Vec<String>,
    pub skus: Vec<String>,
    pub all: bool,
    pub json: bool,
}

/// Runs availability checks for the selected products and prints the results.
///
/// # Errors
///
/// Returns an error for a blank zip code, an unknown catalog label, an empty
/// selection, or a failure to load configuration or build the HTTP client.
/// Per-SKU remote failures are reported in the output, not propagated.
pub(crate) async fn run_check(config: &AppConfig, args: &CheckArgs) -> anyhow::Result<()> {
    let zip = args.zip.trim();
    if zip.is_empty() {
        bail!("zip code must not be blank");
    }

    let catalog = stockcheck_core::load_products(&config.products_path)?;

    // (display label, sku) pairs; raw SKUs display as themselves.
    let mut targets: Vec<(String, String)> = Vec::new();
    if args.all {
        targets.extend(
            catalog
                .products
                .iter()
                .map(|p| (p.label.clone(), p.sku.clone())),
        );
    } else {
        for label in &args.products {
            let sku = catalog
                .sku_for_label(label)
                .ok_or_else(|| anyhow!("unknown product '{label}'"))?;
            targets.push((label.clone(), sku.to_string()));
        }
        for sku in &args.skus {
            targets.push((sku.clone(), sku.clone()));
        }
    }
    if targets.is_empty() {
        bail!("nothing to check: pass --product, --sku, or --all");
    }

    let checker = StockChecker::from_app_config(config)?;
    let skus: Vec<String> = targets.iter().map(|(_, sku)| sku.clone()).collect();
    let results = checker.check_many(&skus, zip).await;

    if args.json {
        let mut out = serde_json::Map::new();
        for ((label, sku), result) in targets.iter().zip(&results) {
            out.insert(
                label.clone(),
                serde_json::json!({ "sku": sku, "availability": result }),
            );
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(out))?
        );
        return Ok(());
    }

    for ((label, sku), result) in targets.iter().zip(&results) {
        print_result(label, sku, result);
    }
    Ok(())
}

fn print_result(label: &str, sku: &str, result: &AvailabilityResult) {
    println!("{label} (sku {sku}):");

    if let Some(err) = &result.error {
        println!("  error: {err}");
        return;
    }
    if result.pickup_stores.is_empty() && result.ship_stores.is_empty() {
        println!("  no stores with availability");
        return;
    }

    for offer in &result.pickup_stores {
        println!(
            "  pickup   {} ({}, {} / {} mi): {} on hand, ready {}",
            offer.store.name,
            offer.store.city,
            offer.store.state,
            offer.store.distance,
            quantity_display(offer.quantity),
            offer.available_date
        );
    }
    for offer in &result.ship_stores {
        println!(
            "  ship-to  {} ({}, {} / {} mi): {}, arrives {}",
            offer.store.name,
            offer.store.city,
            offer.store.state,
            offer.store.distance,
            offer.service_level,
            date_window(offer.min_date.as_deref(), offer.max_date.as_deref())
        );
    }
}

fn quantity_display(quantity: u32) -> String {
    if quantity >= HIGH_STOCK_QUANTITY {
        "high stock".to_string()
    } else {
        quantity.to_string()
    }
}

fn date_window(min: Option<&str>, max: Option<&str>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min} to {max}"),
        (Some(date), None) | (None, Some(date)) => date.to_string(),
        (None, None) => "date unknown".to_string(),
    }
}
