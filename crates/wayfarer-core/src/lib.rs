// crates/wayfarer-core/src/lib.rs

pub mod api; // Lookup descriptions + transports
pub mod common;
pub mod config;
pub mod coordinator; // Token supersession + outcome mapping
pub mod error;
pub mod explorer; // The adapter-facing facade
pub mod favourites;
pub mod featured; // Independent fan-out loader
pub mod map;
pub mod model;
pub mod notice;
pub mod prelude;
pub mod reconcile; // Commit / discard decisions
pub mod text;
pub mod token;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::error::{Result, WayfarerError};
pub use crate::common::{Surface, ViewStats};
pub use crate::config::WayfarerConfig;
pub use crate::coordinator::{LookupOutcome, RequestCoordinator, Resolved};
pub use crate::explorer::Explorer;
pub use crate::featured::{FeaturedEntry, FeaturedLoadState, FeaturedLoader};
pub use crate::model::{CountryRaw, CountryRecord, LatLng, RegionFilter, SortKey};
pub use crate::reconcile::{CommitDecision, DiscardReason, ResultReconciler, ViewState};
pub use crate::token::{RequestToken, TokenRegistry};
pub use crate::validate::{validate, SearchQuery, ValidationError};
#[cfg(feature = "http")]
pub use crate::api::http::HttpCountryApi;
