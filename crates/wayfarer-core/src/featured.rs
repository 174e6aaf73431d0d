// crates/wayfarer-core/src/featured.rs

//! # Featured Destinations
//!
//! Best-effort fan-out: one exact-name lookup per featured country. Each
//! lookup fails on its own; a failure is logged and recorded for that name
//! only, never surfaced, never retried.
//!
//! Lookups run in a sliding window of `featured_concurrency` requests.
//! Updates are always delivered in list order, so the display fills in the
//! same order whatever the window size.

use crate::api::{ApiError, Lookup};
use crate::config::WayfarerConfig;
use crate::model::CountryRecord;
use crate::traits::{CountryApi, NameMatch};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeaturedFailure {
    #[error("no exact match")]
    NoMatch,
    #[error(transparent)]
    Api(ApiError),
    #[error("lookup task ended unexpectedly: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeaturedEntry {
    Pending,
    Loaded(CountryRecord),
    Failed(FeaturedFailure),
}

impl FeaturedEntry {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeaturedEntry::Pending)
    }
}

/// Per-name state, in the configured order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedLoadState {
    entries: Vec<(String, FeaturedEntry)>,
}

impl FeaturedLoadState {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            entries: names
                .into_iter()
                .map(|n| (n.into(), FeaturedEntry::Pending))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, FeaturedEntry)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&FeaturedEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n.is_named(name))
            .map(|(_, e)| e)
    }

    /// Loaded records in list order.
    pub fn loaded(&self) -> impl Iterator<Item = &CountryRecord> {
        self.entries.iter().filter_map(|(_, e)| match e {
            FeaturedEntry::Loaded(r) => Some(r),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(n, e)| match e {
            FeaturedEntry::Failed(_) => Some(n.as_str()),
            _ => None,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, e)| e.is_terminal())
    }
}

/// Handed to the `load` callback each time an entry reaches its final state.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedUpdate<'a> {
    pub index: usize,
    pub name: &'a str,
    pub entry: &'a FeaturedEntry,
}

pub struct FeaturedLoader<A> {
    api: Arc<A>,
    state: FeaturedLoadState,
    window: usize,
    timeout: Duration,
}

impl<A: CountryApi + 'static> FeaturedLoader<A> {
    pub fn new(api: Arc<A>, config: &WayfarerConfig) -> Self {
        Self::with_names(api, config.featured.iter().cloned(), config)
    }

    pub fn with_names<S: Into<String>>(
        api: Arc<A>,
        names: impl IntoIterator<Item = S>,
        config: &WayfarerConfig,
    ) -> Self {
        Self {
            api,
            state: FeaturedLoadState::new(names),
            window: config.featured_concurrency.max(1),
            timeout: config.request_timeout(),
        }
    }

    pub fn state(&self) -> &FeaturedLoadState {
        &self.state
    }

    /// Resolve every pending entry, calling `on_update` in list order as
    /// each one settles. Entries that already settled (loaded *or* failed)
    /// are left alone.
    pub async fn load<F>(&mut self, mut on_update: F) -> &FeaturedLoadState
    where
        F: FnMut(FeaturedUpdate<'_>),
    {
        let pending: Vec<usize> = self
            .state
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (_, e))| !e.is_terminal())
            .map(|(i, _)| i)
            .collect();
        let mut queue = pending.into_iter();
        let mut in_flight: VecDeque<(usize, JoinHandle<Result<CountryRecord, FeaturedFailure>>)> =
            VecDeque::with_capacity(self.window);

        loop {
            while in_flight.len() < self.window {
                let Some(index) = queue.next() else { break };
                let name = self.state.entries[index].0.clone();
                debug!(%name, "requesting featured destination");
                let handle = tokio::spawn(fetch_exact(Arc::clone(&self.api), name, self.timeout));
                in_flight.push_back((index, handle));
            }

            let Some((index, handle)) = in_flight.pop_front() else { break };
            let result = handle
                .await
                .unwrap_or_else(|e| Err(FeaturedFailure::Aborted(e.to_string())));

            let (name, entry) = &mut self.state.entries[index];
            *entry = match result {
                Ok(record) => FeaturedEntry::Loaded(record),
                Err(failure) => {
                    warn!(%name, error = %failure, "featured destination unavailable");
                    FeaturedEntry::Failed(failure)
                }
            };
            on_update(FeaturedUpdate { index, name, entry });
        }

        &self.state
    }
}

async fn fetch_exact<A: CountryApi>(
    api: Arc<A>,
    name: String,
    timeout: Duration,
) -> Result<CountryRecord, FeaturedFailure> {
    let lookup = Lookup::exact(&name);
    let raw = match tokio::time::timeout(timeout, api.fetch(&lookup)).await {
        Err(_) => return Err(FeaturedFailure::Api(ApiError::Timeout)),
        Ok(Err(ApiError::NotFound)) => return Err(FeaturedFailure::NoMatch),
        Ok(Err(e)) => return Err(FeaturedFailure::Api(e)),
        Ok(Ok(raw)) => raw,
    };
    raw.into_iter()
        .next()
        .map(CountryRecord::from)
        .ok_or(FeaturedFailure::NoMatch)
}
