// crates/wayfarer-core/src/api/http.rs
#![cfg(feature = "http")]

use super::{parse_countries, ApiError, Lookup};
use crate::config::WayfarerConfig;
use crate::error::{Result, WayfarerError};
use crate::model::CountryRaw;
use crate::traits::CountryApi;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

/// [`CountryApi`] over HTTPS with `reqwest` (rustls).
///
/// The client-level timeout mirrors `request_timeout_ms`; the coordinator
/// applies the same bound on its side, so either one firing ends the request.
#[derive(Debug, Clone)]
pub struct HttpCountryApi {
    client: Client,
    base: Url,
}

impl HttpCountryApi {
    pub fn new(config: &WayfarerConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            WayfarerError::Config(format!("invalid base_url '{}': {e}", config.base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(WayfarerError::Config(format!(
                "base_url '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// Full request URL, with every path segment percent-encoded.
    pub fn url_for(&self, lookup: &Lookup) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(lookup.path_segments());
        }
        if let Some((k, v)) = lookup.query_pair() {
            url.query_pairs_mut().append_pair(k, v);
        }
        url
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl CountryApi for HttpCountryApi {
    async fn fetch(&self, lookup: &Lookup) -> std::result::Result<Vec<CountryRaw>, ApiError> {
        let url = self.url_for(lookup);
        debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        // Error bodies are not read.
        let body = if status.is_success() {
            response.bytes().await.map_err(transport_error)?.to_vec()
        } else {
            Vec::new()
        };
        classify(status, &body)
    }
}

/// Map a finished response onto the lookup result.
fn classify(status: StatusCode, body: &[u8]) -> std::result::Result<Vec<CountryRaw>, ApiError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    parse_countries(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegionFilter;

    fn api(base: &str) -> HttpCountryApi {
        let config = WayfarerConfig {
            base_url: base.to_string(),
            ..WayfarerConfig::default()
        };
        HttpCountryApi::new(&config).unwrap()
    }

    #[test]
    fn escapes_the_query_as_one_segment() {
        let api = api("https://restcountries.com");
        let url = api.url_for(&Lookup::exact("New Zealand"));
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/New%20Zealand?fullText=true"
        );

        let url = api.url_for(&Lookup::exact("a/b"));
        assert_eq!(url.path(), "/v3.1/name/a%2Fb");
    }

    #[test]
    fn escapes_non_ascii_letters() {
        let api = api("https://restcountries.com/");
        let url = api.url_for(&Lookup::exact("Curaçao"));
        assert_eq!(url.path(), "/v3.1/name/Cura%C3%A7ao");
    }

    #[test]
    fn keeps_a_base_path_prefix() {
        let api = api("http://localhost:8080/mirror/");
        let url = api.url_for(&Lookup::region(RegionFilter::All));
        assert_eq!(url.as_str(), "http://localhost:8080/mirror/v3.1/all");
    }

    #[test]
    fn classifies_not_found_regardless_of_body() {
        let body = br#"{"status":404,"message":"Not Found"}"#;
        assert_eq!(
            classify(StatusCode::NOT_FOUND, body).unwrap_err(),
            ApiError::NotFound
        );
        assert_eq!(
            classify(StatusCode::NOT_FOUND, b"").unwrap_err(),
            ApiError::NotFound
        );
    }

    #[test]
    fn classifies_other_failures_by_status() {
        assert_eq!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, b"oops").unwrap_err(),
            ApiError::Status(500)
        );
        assert_eq!(
            classify(StatusCode::TOO_MANY_REQUESTS, b"").unwrap_err(),
            ApiError::Status(429)
        );
    }

    #[test]
    fn classifies_unusable_success_bodies_as_malformed() {
        assert!(matches!(classify(StatusCode::OK, b"{}"), Err(ApiError::Malformed(_))));
        assert!(matches!(classify(StatusCode::OK, b"<html>"), Err(ApiError::Malformed(_))));
    }

    #[test]
    fn classifies_country_arrays() {
        let body = br#"[{ "name": { "common": "Japan" }, "capital": ["Tokyo"] }]"#;
        let raw = classify(StatusCode::OK, body).unwrap();
        assert_eq!(raw.len(), 1);
        assert!(classify(StatusCode::OK, b"[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_unparsable_base_urls() {
        let config = WayfarerConfig {
            base_url: "not a url".into(),
            ..WayfarerConfig::default()
        };
        assert!(matches!(
            HttpCountryApi::new(&config),
            Err(WayfarerError::Config(_))
        ));
    }
}
