// crates/wayfarer-core/src/model/record.rs
use super::{NOT_AVAILABLE, UNKNOWN};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// Languages beyond this many are kept on the record but not displayed.
pub const MAX_DISPLAYED_LANGUAGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A country as the client displays it.
///
/// Built from [`CountryRaw`](super::CountryRaw) via `From`. Only `name` is
/// guaranteed; everything else may be absent and has a display fallback
/// through the `*_label` accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub official_name: Option<String>,
    /// Flag image URL (SVG preferred, PNG otherwise). Empty when the API has
    /// neither; renderers must tolerate an empty or broken image.
    pub flag: String,
    pub flag_alt: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    /// (code, display name) in source order.
    pub currencies: Vec<(String, String)>,
    /// (code, display name) in source order.
    pub languages: Vec<(String, String)>,
    pub coordinates: Option<LatLng>,
    pub cca2: Option<String>,
    pub cca3: Option<String>,
    /// Square kilometres.
    pub area: Option<f64>,
    pub timezones: Vec<String>,
}

impl CountryRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region_label(&self) -> &str {
        self.region.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn subregion_label(&self) -> &str {
        self.subregion.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn capital_label(&self) -> &str {
        self.capital.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn population_label(&self) -> String {
        format_population(self.population)
    }

    pub fn currencies_label(&self) -> String {
        join_names(self.currencies.iter())
    }

    /// At most [`MAX_DISPLAYED_LANGUAGES`] names, in source order.
    pub fn languages_label(&self) -> String {
        join_names(self.languages.iter().take(MAX_DISPLAYED_LANGUAGES))
    }

    /// Popup text for this record's map marker.
    pub fn popup_text(&self) -> String {
        format!("{}\nCapital: {}", self.name, self.capital_label())
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

fn join_names<'a>(pairs: impl Iterator<Item = &'a (String, String)>) -> String {
    let names: Vec<&str> = pairs.map(|(_, name)| name.as_str()).collect();
    if names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        names.join(", ")
    }
}

/// Format a population for cards: `125.7M`, `42K`, `812`, or `N/A`.
///
/// ```rust
/// use wayfarer_core::model::format_population;
///
/// assert_eq!(format_population(Some(125_700_000)), "125.7M");
/// assert_eq!(format_population(Some(38_400)), "38K");
/// assert_eq!(format_population(Some(812)), "812");
/// assert_eq!(format_population(None), "N/A");
/// ```
pub fn format_population(population: Option<u64>) -> String {
    match population {
        None => NOT_AVAILABLE.to_string(),
        // Halves round away from zero: 2_500 is "3K", 1_250_000 is "1.3M".
        Some(p) if p >= 1_000_000 => format!("{:.1}M", (p as f64 / 100_000.0).round() / 10.0),
        Some(p) if p >= 1_000 => format!("{}K", (p as f64 / 1_000.0).round()),
        Some(p) => p.to_string(),
    }
}
