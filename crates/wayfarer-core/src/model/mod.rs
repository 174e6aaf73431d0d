// crates/wayfarer-core/src/model/mod.rs
pub mod convert;
pub mod raw;
pub mod record;
pub mod region;
pub mod sort;

pub use raw::{CountryRaw, FlagsRaw, NameRaw};
pub use record::{format_population, CountryRecord, LatLng, MAX_DISPLAYED_LANGUAGES};
pub use region::RegionFilter;
pub use sort::SortKey;

/// Display fallback for absent names, regions and subregions.
pub const UNKNOWN: &str = "Unknown";
/// Display fallback for absent capitals, populations, currencies and languages.
pub const NOT_AVAILABLE: &str = "N/A";
