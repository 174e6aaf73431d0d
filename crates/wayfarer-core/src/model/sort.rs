// crates/wayfarer-core/src/model/sort.rs
use super::CountryRecord;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PopulationAsc,
    PopulationDesc,
}

impl SortKey {
    /// Stable in-place sort. Names compare accent- and case-insensitively;
    /// records without a population always sort last.
    pub fn sort(&self, records: &mut [CountryRecord]) {
        match self {
            SortKey::NameAsc => records.sort_by_cached_key(|r| fold_key(&r.name)),
            SortKey::NameDesc => {
                records.sort_by_cached_key(|r| std::cmp::Reverse(fold_key(&r.name)))
            }
            SortKey::PopulationAsc => records.sort_by(|a, b| by_population(a, b, false)),
            SortKey::PopulationDesc => records.sort_by(|a, b| by_population(a, b, true)),
        }
    }
}

fn by_population(a: &CountryRecord, b: &CountryRecord, descending: bool) -> Ordering {
    match (a.population, b.population) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "population" | "population-asc" => Ok(SortKey::PopulationAsc),
            "population-desc" => Ok(SortKey::PopulationDesc),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, name-desc, population or population-desc)"
            )),
        }
    }
}
