// crates/wayfarer-core/src/coordinator.rs

//! # Request Coordinator
//!
//! Issues lookups per [`Surface`] under the single-current-token rule:
//!
//! 1. mint a token (superseding the previous one, optionally aborting it),
//! 2. run exactly one `CountryApi::fetch`, bounded by `request_timeout`,
//! 3. fold the transport result into a [`LookupOutcome`],
//! 4. release the loading flag the token owns.
//!
//! Every call resolves, stale or not. Whether a resolved outcome may touch
//! the view is decided later by the reconciler.

use crate::api::{ApiError, Lookup};
use crate::common::Surface;
use crate::config::WayfarerConfig;
use crate::model::{convert, CountryRaw, CountryRecord, RegionFilter};
use crate::token::{RequestToken, TokenRegistry};
use crate::traits::CountryApi;
use crate::validate::SearchQuery;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Typed result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success(Vec<CountryRecord>),
    Empty,
    NetworkError,
    Cancelled,
}

impl LookupOutcome {
    /// 404, empty arrays and unparsable bodies are "nothing found"; any
    /// other failure is a network error.
    pub fn from_response(response: Result<Vec<CountryRaw>, ApiError>) -> Self {
        match response {
            Ok(raw) if raw.is_empty() => LookupOutcome::Empty,
            Ok(raw) => LookupOutcome::Success(convert::from_raw(raw)),
            Err(e) if e.is_no_result() => LookupOutcome::Empty,
            Err(_) => LookupOutcome::NetworkError,
        }
    }
}

/// A finished lookup: who issued it, what was asked, what came back.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub token: RequestToken,
    pub lookup: Lookup,
    pub outcome: LookupOutcome,
}

pub struct RequestCoordinator<A> {
    api: Arc<A>,
    tokens: Arc<TokenRegistry>,
    timeout: Duration,
    abort_superseded: bool,
}

impl<A: CountryApi> RequestCoordinator<A> {
    pub fn new(api: Arc<A>, config: &WayfarerConfig) -> Self {
        Self {
            api,
            tokens: Arc::new(TokenRegistry::new()),
            timeout: config.request_timeout(),
            abort_superseded: config.abort_superseded,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenRegistry> {
        &self.tokens
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn is_loading(&self, surface: Surface) -> bool {
        self.tokens.is_loading(surface)
    }

    /// Partial-name search for an already validated query.
    pub async fn search(&self, surface: Surface, query: &SearchQuery) -> Resolved {
        self.issue(surface, Lookup::by_name(query)).await
    }

    /// Region listing (`/region/{r}` or `/all`).
    pub async fn browse(&self, surface: Surface, region: RegionFilter) -> Resolved {
        self.issue(surface, Lookup::region(region)).await
    }

    pub async fn issue(&self, surface: Surface, lookup: Lookup) -> Resolved {
        let ticket = self.tokens.supersede(surface, self.abort_superseded);
        let release = FinishGuard {
            tokens: &self.tokens,
            token: ticket.token,
        };
        debug!(%surface, seq = ticket.token.seq(), %lookup, "issuing lookup");

        let outcome = tokio::select! {
            biased;
            _ = ticket.abort.cancelled() => LookupOutcome::Cancelled,
            response = tokio::time::timeout(self.timeout, self.api.fetch(&lookup)) => {
                let response = response.unwrap_or(Err(ApiError::Timeout));
                if let Err(e) = &response {
                    if !e.is_no_result() {
                        warn!(%surface, seq = ticket.token.seq(), %lookup, error = %e, "lookup failed");
                    }
                }
                LookupOutcome::from_response(response)
            }
        };

        drop(release);
        debug!(
            %surface,
            seq = ticket.token.seq(),
            current = self.tokens.is_current(ticket.token),
            "lookup resolved"
        );

        Resolved {
            token: ticket.token,
            lookup,
            outcome,
        }
    }
}

/// Releases the token's loading flag however `issue` ends, including when
/// its future is dropped before resolving.
struct FinishGuard<'a> {
    tokens: &'a TokenRegistry,
    token: RequestToken,
}

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.tokens.finish(self.token);
    }
}
