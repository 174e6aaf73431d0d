// crates/wayfarer-core/src/model/region.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regions exposed by `GET /v3.1/region/{region}`, plus `All` for
/// `GET /v3.1/all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    All,
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl RegionFilter {
    pub const ALL: [RegionFilter; 7] = [
        RegionFilter::All,
        RegionFilter::Africa,
        RegionFilter::Americas,
        RegionFilter::Antarctic,
        RegionFilter::Asia,
        RegionFilter::Europe,
        RegionFilter::Oceania,
    ];

    /// The region as the API spells it (`None` for [`RegionFilter::All`]).
    pub fn api_name(&self) -> Option<&'static str> {
        match self {
            RegionFilter::All => None,
            RegionFilter::Africa => Some("africa"),
            RegionFilter::Americas => Some("americas"),
            RegionFilter::Antarctic => Some("antarctic"),
            RegionFilter::Asia => Some("asia"),
            RegionFilter::Europe => Some("europe"),
            RegionFilter::Oceania => Some("oceania"),
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RegionFilter::All => "All regions",
            RegionFilter::Africa => "Africa",
            RegionFilter::Americas => "Americas",
            RegionFilter::Antarctic => "Antarctic",
            RegionFilter::Asia => "Asia",
            RegionFilter::Europe => "Europe",
            RegionFilter::Oceania => "Oceania",
        };
        f.write_str(label)
    }
}

impl FromStr for RegionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "all" {
            return Ok(RegionFilter::All);
        }
        RegionFilter::ALL
            .into_iter()
            .find(|r| r.api_name() == Some(key.as_str()))
            .ok_or_else(|| {
                format!("unknown region '{s}' (expected all, africa, americas, antarctic, asia, europe or oceania)")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Europe".parse::<RegionFilter>(), Ok(RegionFilter::Europe));
        assert_eq!(" ASIA ".parse::<RegionFilter>(), Ok(RegionFilter::Asia));
        assert_eq!("all".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert!("Atlantis".parse::<RegionFilter>().is_err());
    }

    #[test]
    fn all_has_no_api_name() {
        assert_eq!(RegionFilter::All.api_name(), None);
        assert_eq!(RegionFilter::Oceania.api_name(), Some("oceania"));
    }
}
