// crates/wayfarer-core/src/model/convert.rs
use super::raw::{CountryRaw, FlagsRaw};
use super::record::{CountryRecord, LatLng};
use super::UNKNOWN;
use serde_json::{Map, Value};

/// **Standard Converter:** Raw -> Record, preserving payload order.
pub fn from_raw(raw_countries: Vec<CountryRaw>) -> Vec<CountryRecord> {
    raw_countries.into_iter().map(CountryRecord::from).collect()
}

impl From<CountryRaw> for CountryRecord {
    fn from(raw: CountryRaw) -> Self {
        let (common, official) = match raw.name {
            Some(n) => (n.common, n.official),
            None => (None, None),
        };
        let (flag, flag_alt) = pick_flag(raw.flags);

        CountryRecord {
            name: common
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            official_name: official,
            flag,
            flag_alt,
            region: non_empty(raw.region),
            subregion: non_empty(raw.subregion),
            capital: raw
                .capital
                .and_then(|caps| caps.into_iter().find(|c| !c.trim().is_empty())),
            population: raw.population,
            currencies: currency_names(raw.currencies),
            languages: language_names(raw.languages),
            coordinates: raw.latlng.as_deref().and_then(parse_latlng),
            cca2: raw.cca2,
            cca3: raw.cca3,
            area: raw.area,
            timezones: raw.timezones.unwrap_or_default(),
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

// SVG first, PNG second, empty otherwise.
fn pick_flag(flags: Option<FlagsRaw>) -> (String, Option<String>) {
    match flags {
        Some(f) => {
            let url = non_empty(f.svg).or(non_empty(f.png)).unwrap_or_default();
            (url, non_empty(f.alt))
        }
        None => (String::new(), None),
    }
}

fn currency_names(currencies: Option<Map<String, Value>>) -> Vec<(String, String)> {
    currencies
        .unwrap_or_default()
        .into_iter()
        .map(|(code, v)| {
            let name = v
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| code.clone());
            (code, name)
        })
        .collect()
}

fn language_names(languages: Option<Map<String, Value>>) -> Vec<(String, String)> {
    languages
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(code, v)| v.as_str().map(|name| (code, name.to_string())))
        .collect()
}

fn parse_latlng(values: &[f64]) -> Option<LatLng> {
    match values {
        [lat, lng, ..] if lat.is_finite() && lng.is_finite() => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}
