// crates/wayfarer-core/tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use wayfarer_core::api::{ApiError, Lookup};
use wayfarer_core::model::CountryRaw;
use wayfarer_core::traits::CountryApi;

#[derive(Clone)]
struct Reply {
    result: Result<Vec<CountryRaw>, ApiError>,
    delay: Duration,
}

/// Scripted `CountryApi`: replies are keyed by the lookup's subject
/// ("Japan", "Europe", ...). Unknown subjects get a 404.
#[derive(Default)]
pub struct StubApi {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
    seen: Mutex<Vec<Lookup>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, subject: &str, countries: Vec<CountryRaw>) -> Self {
        self.ok_after(subject, countries, Duration::ZERO)
    }

    pub fn ok_after(mut self, subject: &str, countries: Vec<CountryRaw>, delay: Duration) -> Self {
        self.replies.insert(
            subject.to_string(),
            Reply {
                result: Ok(countries),
                delay,
            },
        );
        self
    }

    pub fn err(self, subject: &str, error: ApiError) -> Self {
        self.err_after(subject, error, Duration::ZERO)
    }

    pub fn err_after(mut self, subject: &str, error: ApiError, delay: Duration) -> Self {
        self.replies.insert(
            subject.to_string(),
            Reply {
                result: Err(error),
                delay,
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Lookup> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountryApi for StubApi {
    async fn fetch(&self, lookup: &Lookup) -> Result<Vec<CountryRaw>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(lookup.clone());

        let reply = self.replies.get(&lookup.subject()).cloned().unwrap_or(Reply {
            result: Err(ApiError::NotFound),
            delay: Duration::ZERO,
        });
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}

pub fn country(name: &str, capital: &str, population: u64, latlng: Option<(f64, f64)>) -> CountryRaw {
    let latlng = latlng.map(|(lat, lng)| vec![lat, lng]).unwrap_or_default();
    serde_json::from_value(json!({
        "name": { "common": name, "official": name },
        "flags": { "svg": format!("https://flagcdn.com/{}.svg", name.to_lowercase()) },
        "region": "Test",
        "capital": [capital],
        "population": population,
        "latlng": latlng,
    }))
    .unwrap()
}

pub fn japan() -> CountryRaw {
    country("Japan", "Tokyo", 125_700_000, Some((36.0, 138.0)))
}

pub fn united() -> Vec<CountryRaw> {
    vec![
        country("United Kingdom", "London", 67_215_293, Some((54.0, -2.0))),
        country("United States", "Washington, D.C.", 329_484_123, Some((38.0, -97.0))),
        country("United Arab Emirates", "Abu Dhabi", 9_890_400, Some((24.0, 54.0))),
    ]
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
