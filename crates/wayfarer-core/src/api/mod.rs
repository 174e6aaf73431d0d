// crates/wayfarer-core/src/api/mod.rs

//! # Country Lookup API
//!
//! Describes *what* to ask the REST Countries v3.1 endpoint ([`Lookup`]) and
//! *how it failed* ([`ApiError`]). The transport itself sits behind
//! [`CountryApi`](crate::traits::CountryApi); the production implementation
//! lives in [`http`] (feature `http`).

use crate::model::{CountryRaw, RegionFilter};
use crate::validate::SearchQuery;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::warn;

#[cfg(feature = "http")]
pub mod http;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";
pub const API_VERSION: &str = "v3.1";

/// One request against the country endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// `GET /v3.1/name/{query}`, with `?fullText=true` when `exact`.
    Name { query: String, exact: bool },
    /// `GET /v3.1/region/{region}` or `GET /v3.1/all`.
    Region(RegionFilter),
}

impl Lookup {
    /// Partial-name search for a validated query.
    pub fn by_name(query: &SearchQuery) -> Self {
        Lookup::Name {
            query: query.as_str().to_string(),
            exact: false,
        }
    }

    /// Full-text match, used for the featured destinations so that e.g.
    /// "Niger" does not also return "Nigeria".
    pub fn exact(name: &str) -> Self {
        Lookup::Name {
            query: name.trim().to_string(),
            exact: true,
        }
    }

    pub fn region(region: RegionFilter) -> Self {
        Lookup::Region(region)
    }

    /// Unescaped path segments below the base URL. Transports are
    /// responsible for percent-encoding each segment.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Lookup::Name { query, .. } => vec![API_VERSION, "name", query.as_str()],
            Lookup::Region(region) => match region.api_name() {
                Some(name) => vec![API_VERSION, "region", name],
                None => vec![API_VERSION, "all"],
            },
        }
    }

    pub fn query_pair(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Lookup::Name { exact: true, .. } => Some(("fullText", "true")),
            _ => None,
        }
    }

    /// What the user asked for, for notices and logs.
    pub fn subject(&self) -> String {
        match self {
            Lookup::Name { query, .. } => query.clone(),
            Lookup::Region(region) => region.to_string(),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path_segments().join("/"))?;
        if let Some((k, v)) = self.query_pair() {
            write!(f, "?{k}={v}")?;
        }
        Ok(())
    }
}

/// Transport-level failure of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no match (HTTP 404)")]
    NotFound,
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Failures that mean "the request worked, there is just nothing to show".
    pub fn is_no_result(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Malformed(_))
    }
}

/// Decode a successful response body.
///
/// Anything but a JSON array is `Malformed`. Array entries that do not fit
/// [`CountryRaw`] are skipped one by one, so a single odd entry does not
/// hide the rest of the response.
pub fn parse_countries(body: &[u8]) -> Result<Vec<CountryRaw>, ApiError> {
    let items: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<CountryRaw>(item) {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed country entry");
                None
            }
        })
        .collect())
}
