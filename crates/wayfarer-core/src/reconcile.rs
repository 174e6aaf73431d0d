// crates/wayfarer-core/src/reconcile.rs

//! # Result Reconciliation
//!
//! Turns a [`Resolved`] lookup into either a committed [`ViewState`] or a
//! discard. The token check comes first: a lookup that is no longer its
//! surface's current one never mutates anything, not even a notice.
//!
//! | outcome        | view                           | notice          |
//! |----------------|--------------------------------|-----------------|
//! | `Success`      | replaced wholesale, map refit  | none            |
//! | `Empty`        | kept (or cleared, see policy)  | info            |
//! | `NetworkError` | kept                           | error           |
//! | `Cancelled`    | kept                           | none            |

use crate::common::{Surface, ViewStats};
use crate::config::{EmptyPolicy, WayfarerConfig};
use crate::coordinator::{LookupOutcome, Resolved};
use crate::error::{Result, WayfarerError};
use crate::map::GeoBounds;
use crate::model::{CountryRecord, LatLng, SortKey};
use crate::notice::{NoticeBoard, NoticeKind};
use crate::token::{RequestToken, TokenRegistry};
use crate::traits::MapSurface;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

pub const NETWORK_ERROR_MESSAGE: &str = "Unable to load countries. Please check your connection.";
pub const FOCUS_ZOOM: u8 = 5;
pub const FOCUS_DURATION_SECS: f64 = 1.5;

/// A map marker derived from one displayed record.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index into [`ViewState::records`].
    pub record: usize,
    pub position: LatLng,
    pub popup: String,
}

/// What one surface currently displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    records: Vec<CountryRecord>,
    markers: Vec<Marker>,
    viewport: Option<GeoBounds>,
    committed: Option<RequestToken>,
}

impl ViewState {
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The padded box the map was last fitted to.
    pub fn viewport(&self) -> Option<GeoBounds> {
        self.viewport
    }

    /// Token of the lookup that produced the displayed records.
    pub fn committed(&self) -> Option<RequestToken> {
        self.committed
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats {
            records: self.records.len(),
            markers: self.markers.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The token was superseded before reconciliation.
    Stale,
    /// This token's outcome was already applied.
    AlreadyCommitted,
    Cancelled,
    NetworkError,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitDecision {
    Commit(ViewState),
    Discard(DiscardReason),
}

impl CommitDecision {
    pub fn is_commit(&self) -> bool {
        matches!(self, CommitDecision::Commit(_))
    }

    pub fn committed(&self) -> Option<&ViewState> {
        match self {
            CommitDecision::Commit(view) => Some(view),
            CommitDecision::Discard(_) => None,
        }
    }
}

/// A surface's view state together with the map widget that shows it.
#[derive(Debug)]
pub struct SurfaceView<M> {
    state: ViewState,
    map: M,
    /// Last token whose outcome was applied, committed or not.
    reconciled: Option<RequestToken>,
}

impl<M: MapSurface> SurfaceView<M> {
    fn new(map: M) -> Self {
        Self {
            state: ViewState::default(),
            map,
            reconciled: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    // Markers are rebuilt from scratch; one per record that has coordinates.
    fn rebuild_markers(&mut self) {
        self.map.clear_markers();
        self.state.markers = self
            .state
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| {
                r.coordinates.map(|position| Marker {
                    record: i,
                    position,
                    popup: r.popup_text(),
                })
            })
            .collect();
        for m in &self.state.markers {
            self.map.place_marker(m.position.lat, m.position.lng, &m.popup);
        }
    }

    fn fit(&mut self, padding_factor: f64) {
        if let Some(bounds) = GeoBounds::from_points(self.state.markers.iter().map(|m| &m.position)) {
            self.map.fit_to_bounds(&bounds, padding_factor);
            self.state.viewport = Some(bounds.padded(padding_factor));
        }
    }
}

pub struct ResultReconciler<M> {
    home: SurfaceView<M>,
    region: SurfaceView<M>,
    notices: NoticeBoard,
    padding_factor: f64,
    error_ttl: Duration,
    info_ttl: Duration,
    empty_policy: EmptyPolicy,
}

impl<M: MapSurface> ResultReconciler<M> {
    pub fn new(home_map: M, region_map: M, config: &WayfarerConfig) -> Self {
        Self {
            home: SurfaceView::new(home_map),
            region: SurfaceView::new(region_map),
            notices: NoticeBoard::default(),
            padding_factor: config.padding_factor,
            error_ttl: config.error_notice_ttl(),
            info_ttl: config.info_notice_ttl(),
            empty_policy: config.empty_policy,
        }
    }

    pub fn surface(&self, surface: Surface) -> &SurfaceView<M> {
        match surface {
            Surface::Home => &self.home,
            Surface::RegionBrowse => &self.region,
        }
    }

    fn surface_mut(&mut self, surface: Surface) -> &mut SurfaceView<M> {
        match surface {
            Surface::Home => &mut self.home,
            Surface::RegionBrowse => &mut self.region,
        }
    }

    pub fn view(&self, surface: Surface) -> &ViewState {
        &self.surface(surface).state
    }

    pub fn map(&self, surface: Surface) -> &M {
        &self.surface(surface).map
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Commit or discard one resolved lookup.
    ///
    /// Safe to call more than once for the same lookup: the second call is
    /// either `Stale` or `AlreadyCommitted` and changes nothing.
    pub fn reconcile(&mut self, tokens: &TokenRegistry, resolved: &Resolved, now: Instant) -> CommitDecision {
        let token = resolved.token;
        let surface = token.surface();

        if !tokens.is_current(token) {
            debug!(%surface, seq = token.seq(), "discarding stale outcome");
            return CommitDecision::Discard(DiscardReason::Stale);
        }
        if self.surface(surface).reconciled == Some(token) {
            return CommitDecision::Discard(DiscardReason::AlreadyCommitted);
        }
        self.surface_mut(surface).reconciled = Some(token);

        match &resolved.outcome {
            LookupOutcome::Cancelled => CommitDecision::Discard(DiscardReason::Cancelled),
            LookupOutcome::NetworkError => {
                self.notices
                    .post(NoticeKind::Error, NETWORK_ERROR_MESSAGE, self.error_ttl, now);
                CommitDecision::Discard(DiscardReason::NetworkError)
            }
            LookupOutcome::Empty => {
                let message = format!("No countries found matching \"{}\"", resolved.lookup.subject());
                self.notices.post(NoticeKind::Info, message, self.info_ttl, now);
                match self.empty_policy {
                    EmptyPolicy::KeepResults => CommitDecision::Discard(DiscardReason::Empty),
                    EmptyPolicy::ClearResults => self.commit(token, Vec::new()),
                }
            }
            LookupOutcome::Success(records) => self.commit(token, records.clone()),
        }
    }

    fn commit(&mut self, token: RequestToken, records: Vec<CountryRecord>) -> CommitDecision {
        let padding = self.padding_factor;
        let view = self.surface_mut(token.surface());

        view.state.records = records;
        view.rebuild_markers();
        view.fit(padding);
        view.state.committed = Some(token);

        info!(
            surface = %token.surface(),
            seq = token.seq(),
            records = view.state.records.len(),
            markers = view.state.markers.len(),
            "committed lookup"
        );
        CommitDecision::Commit(view.state.clone())
    }

    /// Reorder the displayed records. Markers are rebuilt so their record
    /// indices stay valid; the viewport does not move.
    pub fn sort(&mut self, surface: Surface, key: SortKey) {
        let view = self.surface_mut(surface);
        key.sort(&mut view.state.records);
        view.rebuild_markers();
    }

    /// Fly the map to the record at `index`. Returns `false` when the record
    /// has no coordinates.
    pub fn focus(&mut self, surface: Surface, index: usize) -> Result<bool> {
        let view = self.surface_mut(surface);
        let len = view.state.records.len();
        let record = view
            .state
            .records
            .get(index)
            .ok_or(WayfarerError::OutOfRange { surface, index, len })?;

        match record.coordinates {
            Some(p) => {
                view.map.fly_to(p.lat, p.lng, FOCUS_ZOOM, FOCUS_DURATION_SECS);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The surface became visible again; let the map recompute its size.
    pub fn surface_shown(&mut self, surface: Surface) {
        self.surface_mut(surface)
            .map
            .invalidate_size_after_visibility_change();
    }
}
