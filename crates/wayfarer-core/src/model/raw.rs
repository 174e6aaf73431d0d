// crates/wayfarer-core/src/model/raw.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw country object as returned by the REST Countries v3.1 API.
///
/// Every field is optional: the API omits keys freely (Antarctica has no
/// capital, Bouvet Island no currencies). Only the fields the client
/// consumes are declared; unknown keys are ignored.
///
/// `currencies` and `languages` are kept as JSON maps (with serde_json's
/// `preserve_order`) so their source insertion order survives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: Option<NameRaw>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    /// `{ "JPY": { "name": "Japanese yen", "symbol": "¥" } }`
    #[serde(default)]
    pub currencies: Option<Map<String, Value>>,
    /// `{ "jpn": "Japanese" }`
    #[serde(default)]
    pub languages: Option<Map<String, Value>>,
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}
