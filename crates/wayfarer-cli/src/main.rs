//! wayfarer-cli: search and browse countries from your terminal
//!
//! The binary drives the same `Explorer` a graphical front end would, with a
//! headless map standing in for the widget. Each command prints the view the
//! reconciler committed plus any notices it posted.
//!
//! Usage examples
//! --------------
//!
//! - Search by partial name, biggest first
//!   $ wayfarer search united --sort population-desc
//!
//! - Browse a region, narrowed by name
//!   $ wayfarer region europe --query land
//!
//! - Load the featured destinations
//!   $ wayfarer featured
//!
//! - Keep a list of favourites
//!   $ wayfarer favourites add "New Zealand"
//!   $ wayfarer favourites list
//!
//! Logging goes to stderr. `-v` enables debug output; `RUST_LOG` overrides
//! both.
mod args;
mod render;

#[cfg(not(feature = "http"))]
compile_error!("wayfarer-cli talks to the countries API over HTTP; enable the `http` feature");

use crate::args::{CliArgs, Commands, FavouritesAction};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wayfarer_core::prelude::*;

const DEFAULT_STORE: &str = "wayfarer-favourites.json";

type CliExplorer = Explorer<HttpCountryApi, RecordingMap>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let favourites = Favourites::open(JsonFileStore::new(
        args.store.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_STORE)),
    ));

    match args.command {
        Commands::Search { query, sort } => {
            let explorer = explorer(&config)?;
            let decision = explorer.search(Surface::Home, &query).await?;
            if decision.is_commit() {
                if let Some(key) = sort.sort {
                    explorer.sort(Surface::Home, key);
                }
                render::view(&explorer.view(Surface::Home), None, &favourites);
            }
            render::notices(&explorer.visible_notices());
        }

        Commands::Region { region, query, sort } => {
            let explorer = explorer(&config)?;
            if explorer.browse(region).await.is_commit() {
                if let Some(key) = sort.sort {
                    explorer.sort(Surface::RegionBrowse, key);
                }
                println!("{region}");
                println!();
                render::view(
                    &explorer.view(Surface::RegionBrowse),
                    query.as_deref(),
                    &favourites,
                );
            }
            render::notices(&explorer.visible_notices());
        }

        Commands::Featured => {
            let api = Arc::new(HttpCountryApi::new(&config)?);
            let mut loader = FeaturedLoader::new(api, &config);
            let state = loader.load(render::featured).await;
            let total = state.entries().len();
            let loaded = state.loaded().count();
            if loaded < total {
                println!("{loaded} of {total} destinations loaded");
            }
        }

        Commands::Favourites { action } => {
            let mut favourites = favourites;
            match action {
                FavouritesAction::List => {
                    if favourites.names().is_empty() {
                        println!("No favourites yet");
                    }
                    for name in favourites.names() {
                        println!("★ {name}");
                    }
                }
                FavouritesAction::Add { name } => {
                    if favourites.add(&name).context("saving favourites")? {
                        println!("Added {}", name.trim());
                    } else {
                        println!("{} is already a favourite", name.trim());
                    }
                }
                FavouritesAction::Remove { name } => {
                    if favourites.remove(&name).context("saving favourites")? {
                        println!("Removed {}", name.trim());
                    } else {
                        println!("{} is not a favourite", name.trim());
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &CliArgs) -> anyhow::Result<WayfarerConfig> {
    let mut config = match &args.config {
        Some(path) => WayfarerConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WayfarerConfig::default(),
    };
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.request_timeout_ms = ms;
    }
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn explorer(config: &WayfarerConfig) -> anyhow::Result<CliExplorer> {
    let api = Arc::new(HttpCountryApi::new(config)?);
    Ok(Explorer::new(
        api,
        RecordingMap::default(),
        RecordingMap::default(),
        config,
    ))
}
