use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wayfarer_core::model::{RegionFilter, SortKey};

/// CLI arguments for wayfarer-cli
#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    version,
    about = "Search and browse countries from the REST Countries API"
)]
pub struct CliArgs {
    /// Path to a JSON config file (see `WayfarerConfig`)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL (default: https://restcountries.com)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Override the per-request timeout in milliseconds
    #[arg(long = "timeout-ms", global = true)]
    pub timeout_ms: Option<u64>,

    /// Favourites file (default: ./wayfarer-favourites.json)
    #[arg(long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Log lookups and commits to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search countries by (partial) name
    Search {
        /// Country name, at least two letters (e.g. "Japan", "united")
        query: String,

        #[command(flatten)]
        sort: SortArg,
    },

    /// List the countries of a region
    Region {
        /// all, africa, americas, antarctic, asia, europe or oceania
        region: RegionFilter,

        /// Only show countries whose name contains this text
        #[arg(short = 'q', long = "query")]
        query: Option<String>,

        #[command(flatten)]
        sort: SortArg,
    },

    /// Load the featured destinations
    Featured,

    /// Manage favourite countries
    Favourites {
        #[command(subcommand)]
        action: FavouritesAction,
    },
}

#[derive(Debug, Args)]
pub struct SortArg {
    /// name, name-desc, population or population-desc
    #[arg(short = 's', long = "sort")]
    pub sort: Option<SortKey>,
}

#[derive(Debug, Subcommand)]
pub enum FavouritesAction {
    /// Print all favourites
    List,
    /// Add a country name
    Add { name: String },
    /// Remove a country name
    Remove { name: String },
}
