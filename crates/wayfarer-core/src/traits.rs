// crates/wayfarer-core/src/traits.rs
use crate::api::{ApiError, Lookup};
use crate::error::Result;
use crate::map::GeoBounds;
use crate::model::CountryRaw;
use crate::text::fold_key;
use async_trait::async_trait;
use serde_json::Value;

/// Transport abstraction: the country-lookup endpoint.
///
/// Implementations resolve a [`Lookup`] to the raw JSON array returned by the
/// REST Countries API. They report a 404 as [`ApiError::NotFound`], any other
/// non-2xx status as [`ApiError::Status`] and an unparsable body as
/// [`ApiError::Malformed`]; the coordinator decides what each of those means
/// for the view.
///
/// Implementors must be `Send + Sync` so a single client can be shared by the
/// coordinator and the featured loader through an `Arc`.
#[async_trait]
pub trait CountryApi: Send + Sync {
    async fn fetch(&self, lookup: &Lookup) -> std::result::Result<Vec<CountryRaw>, ApiError>;
}

/// The map widget, seen from the core.
///
/// The core only issues commands; rendering, tiles and popups belong to the
/// implementor. See [`RecordingMap`](crate::map::RecordingMap) for a headless
/// implementation.
pub trait MapSurface: Send {
    fn place_marker(&mut self, lat: f64, lng: f64, popup: &str);
    fn clear_markers(&mut self);
    /// Fit the viewport to `bounds`, extended on every side by
    /// `padding_factor` times the box's height/width.
    fn fit_to_bounds(&mut self, bounds: &GeoBounds, padding_factor: f64);
    fn fly_to(&mut self, lat: f64, lng: f64, zoom: u8, duration_secs: f64);
    fn invalidate_size_after_visibility_change(&mut self);
}

/// Persistent key-value storage for favourites.
///
/// `get` returns `Ok(None)` for a missing key. Callers treat any `Err` as an
/// empty store.
pub trait FavouritesStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode‑aware, accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use wayfarer_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("Saint Barthélemy").name_contains("barthel"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q.trim())
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q.trim()))
    }
}

impl NameMatch for String {
    fn name_str(&self) -> &str {
        self
    }
}
