//! wayfarer prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::{Surface, ViewStats};
pub use crate::config::{EmptyPolicy, WayfarerConfig};
pub use crate::coordinator::{LookupOutcome, RequestCoordinator, Resolved};
pub use crate::error::{Result, WayfarerError};
pub use crate::explorer::Explorer;
pub use crate::favourites::{Favourites, JsonFileStore, MemoryStore};
pub use crate::featured::{FeaturedEntry, FeaturedLoadState, FeaturedLoader, FeaturedUpdate};
pub use crate::map::{GeoBounds, RecordingMap};
pub use crate::model::{CountryRecord, LatLng, RegionFilter, SortKey};
pub use crate::notice::{Notice, NoticeKind};
pub use crate::reconcile::{CommitDecision, DiscardReason, ResultReconciler, ViewState};
pub use crate::traits::{CountryApi, FavouritesStore, MapSurface, NameMatch};
pub use crate::validate::{validate, SearchQuery, ValidationError};
#[cfg(feature = "http")]
pub use crate::api::http::HttpCountryApi;
