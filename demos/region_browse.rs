//! Region browsing example for wayfarer-rs
//!
//! Lists a region on the region surface, sorts it, narrows it by name and
//! marks favourites (kept in memory here).

use std::sync::Arc;
use wayfarer_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let region: RegionFilter = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("oceania")
        .parse()
        .map_err(WayfarerError::Config)?;

    let config = WayfarerConfig::default();
    let explorer = Explorer::new(
        Arc::new(HttpCountryApi::new(&config)?),
        RecordingMap::default(),
        RecordingMap::default(),
        &config,
    );

    let mut favourites = Favourites::open(MemoryStore::default());
    favourites.add("New Zealand")?;
    favourites.add("Iceland")?;

    println!("=== {region} ===\n");
    if !explorer.browse(region).await.is_commit() {
        for n in explorer.visible_notices() {
            println!("{}", n.message);
        }
        return Ok(());
    }
    explorer.sort(Surface::RegionBrowse, SortKey::PopulationDesc);

    let view = explorer.view(Surface::RegionBrowse);
    for c in view.records().iter().take(10) {
        let star = if favourites.contains_record(c) { "★" } else { " " };
        println!("{star} {:<32} {:>8}  {}", c.name(), c.population_label(), c.capital_label());
    }
    println!("\n{} countries, {} markers", view.stats().records, view.stats().markers);

    println!("\nNames containing \"land\":");
    for c in view.records().iter().filter(|c| c.name_contains("land")) {
        println!("  {}", c.name());
    }

    // A tab switch would call this before the map is visible again.
    explorer.surface_shown(Surface::RegionBrowse);
    Ok(())
}
