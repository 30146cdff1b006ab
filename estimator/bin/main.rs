use anyhow::Result;
use clap::Parser;
use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use estimator::{estimate::estimate, format::human_duration};
use pricing::catalog::Catalog;

mod args;
use args::Args;

fn main() -> Result<()> {
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("quote", LevelFilter::TRACE)
        .with_target("estimator", LevelFilter::TRACE)
        .with_target("pricing", LevelFilter::TRACE);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load_or_default(path),
        None => Catalog::default(),
    };

    if let Some(pattern) = &args.pattern {
        if !catalog.infill_patterns.iter().any(|known| known == pattern) {
            warn!("Unknown infill pattern `{pattern}`, the printer may reject it");
        }
    }

    let order = args.order();
    let breakdown = estimate(&catalog, &order);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let material = catalog.material(&order.material);
    let quality = catalog.quality(&order.quality);

    println!(
        "Quote: {}x {} @ {}",
        order.options.units(),
        material.name,
        quality.label
    );
    println!("  Weight:     {:.1} g", breakdown.weight);
    println!("  Print time: {}", human_duration(breakdown.time_hours));
    println!("  Material:   {:.2}", breakdown.buckets.material);
    println!("  Machine:    {:.2}", breakdown.buckets.machine);
    println!("  Labor:      {:.2}", breakdown.buckets.labor);
    println!("  Subtotal:   {:.0}", breakdown.subtotal);
    if breakdown.shipping_cost > 0.0 {
        println!("  Shipping:   {:.0}", breakdown.shipping_cost);
    } else {
        println!("  Shipping:   free");
    }
    println!("  Total:      {:.0}", breakdown.total_cost);

    Ok(())
}
