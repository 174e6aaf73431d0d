//! Basic usage example for wayfarer-rs
//!
//! This example demonstrates how to:
//! - Validate and search a country name against the live API
//! - Read the committed view: cards, markers and the fitted viewport
//! - Sort the displayed results and focus the map on one of them
//! - Load the featured destinations

use std::sync::Arc;
use wayfarer_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Wayfarer Basic Usage Example ===\n");

    let config = WayfarerConfig::default();
    let api = Arc::new(HttpCountryApi::new(&config)?);
    let explorer = Explorer::new(api.clone(), RecordingMap::default(), RecordingMap::default(), &config);

    // Example 1: Search one country
    println!("--- Example 1: Search \"Japan\" ---");
    if explorer.search(Surface::Home, "Japan").await?.is_commit() {
        for c in explorer.view(Surface::Home).records() {
            println!("{}: capital {}, population {}", c.name(), c.capital_label(), c.population_label());
            println!("  Languages: {}", c.languages_label());
            println!("  Currencies: {}", c.currencies_label());
        }
    }
    println!();

    // Example 2: Partial match, several markers
    println!("--- Example 2: Search \"united\" ---");
    explorer.search(Surface::Home, "united").await?;
    let view = explorer.view(Surface::Home);
    let stats = view.stats();
    println!("{} countries, {} markers", stats.records, stats.markers);
    if let Some(b) = view.viewport() {
        println!("Viewport: {:.1},{:.1} .. {:.1},{:.1}", b.south, b.west, b.north, b.east);
    }
    println!();

    // Example 3: Sort and focus
    println!("--- Example 3: Sort by population, focus the largest ---");
    explorer.sort(Surface::Home, SortKey::PopulationDesc);
    if let Some(first) = explorer.view(Surface::Home).records().first() {
        println!("Largest: {} ({})", first.name(), first.population_label());
    }
    if explorer.focus(Surface::Home, 0)? {
        let focus = explorer.reconciler().map(Surface::Home).focus();
        println!("Map flew to {:?}", focus);
    }
    println!();

    // Example 4: Featured destinations
    println!("--- Example 4: Featured destinations ---");
    let mut loader = FeaturedLoader::new(api, &config);
    let state = loader
        .load(|u| {
            if let FeaturedEntry::Loaded(c) = u.entry {
                println!("✓ {} ({})", c.name(), c.capital_label());
            }
        })
        .await;
    for name in state.failed() {
        println!("✗ {name} unavailable");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
