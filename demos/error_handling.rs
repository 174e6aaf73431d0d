//! Error handling example for wayfarer-rs
//!
//! This example demonstrates how rejected input, empty results and
//! network failures surface: validation errors are returned, everything
//! after the network becomes a notice and never an error.

use std::sync::Arc;
use wayfarer_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Wayfarer Error Handling Example ===\n");

    let config = WayfarerConfig::default();
    let explorer = Explorer::new(
        Arc::new(HttpCountryApi::new(&config)?),
        RecordingMap::default(),
        RecordingMap::default(),
        &config,
    );

    // Example 1: Input rejected before any request
    println!("--- Example 1: Invalid input ---");
    for raw in ["", "a", "Japan123", "<b>Peru</b>"] {
        match explorer.search(Surface::Home, raw).await {
            Err(WayfarerError::Validation(e)) => println!("✗ {raw:?}: {e}"),
            Err(e) => return Err(e),
            Ok(_) => println!("✓ {raw:?} accepted"),
        }
    }
    println!();

    // Example 2: A search with no matches keeps the previous results
    println!("--- Example 2: Nothing found ---");
    explorer.search(Surface::Home, "Peru").await?;
    let decision = explorer.search(Surface::Home, "Xyzzyland").await?;
    println!("Decision: {decision:?}");
    println!("Still showing: {}", explorer.view(Surface::Home).records().len());
    for n in explorer.visible_notices() {
        println!("Notice ({:?}): {}", n.kind, n.message);
    }
    println!();

    // Example 3: Unreachable server
    println!("--- Example 3: Unreachable server ---");
    let offline = WayfarerConfig {
        base_url: "http://127.0.0.1:9".into(),
        request_timeout_ms: 2_000,
        ..WayfarerConfig::default()
    };
    let explorer = Explorer::new(
        Arc::new(HttpCountryApi::new(&offline)?),
        RecordingMap::default(),
        RecordingMap::default(),
        &offline,
    );
    let decision = explorer.search(Surface::Home, "Japan").await?;
    println!("Decision: {decision:?}");
    for n in explorer.visible_notices() {
        println!("Notice ({:?}): {}", n.kind, n.message);
    }
    println!();

    // Example 4: Bad configuration
    println!("--- Example 4: Invalid base URL ---");
    let broken = WayfarerConfig {
        base_url: "not a url".into(),
        ..WayfarerConfig::default()
    };
    match HttpCountryApi::new(&broken) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("✗ {e}"),
    }

    println!("\n=== Error handling example completed ===");
    Ok(())
}
