// crates/wayfarer-core/src/explorer.rs

//! # Explorer
//!
//! The adapter-facing entry point: translate a UI event into
//! `validate` → `issue` → `reconcile`, and nothing more. Front ends (the CLI,
//! a GUI shell) hold one `Explorer` and render from [`Explorer::view`].
//!
//! Overlapping calls on the same surface are fine: each one resolves, but
//! only the newest may commit.

use crate::common::Surface;
use crate::config::WayfarerConfig;
use crate::coordinator::{RequestCoordinator, Resolved};
use crate::error::Result;
use crate::model::{RegionFilter, SortKey};
use crate::reconcile::{CommitDecision, ResultReconciler, ViewState};
use crate::notice::Notice;
use crate::traits::{CountryApi, MapSurface};
use crate::validate::validate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;

pub struct Explorer<A, M> {
    coordinator: RequestCoordinator<A>,
    reconciler: Mutex<ResultReconciler<M>>,
}

impl<A: CountryApi, M: MapSurface> Explorer<A, M> {
    pub fn new(api: Arc<A>, home_map: M, region_map: M, config: &WayfarerConfig) -> Self {
        Self {
            coordinator: RequestCoordinator::new(api, config),
            reconciler: Mutex::new(ResultReconciler::new(home_map, region_map, config)),
        }
    }

    pub fn coordinator(&self) -> &RequestCoordinator<A> {
        &self.coordinator
    }

    /// Lock the reconciler. Never hold the guard across an `.await`.
    pub fn reconciler(&self) -> MutexGuard<'_, ResultReconciler<M>> {
        self.reconciler.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate `raw`, look it up on `surface`, and reconcile the result.
    ///
    /// Invalid input returns `Err(Validation)` without touching the network.
    pub async fn search(&self, surface: Surface, raw: &str) -> Result<CommitDecision> {
        let query = validate(raw)?;
        let resolved = self.coordinator.search(surface, &query).await;
        Ok(self.reconcile(&resolved))
    }

    /// List a region on the region-browse surface.
    pub async fn browse(&self, region: RegionFilter) -> CommitDecision {
        let resolved = self.coordinator.browse(Surface::RegionBrowse, region).await;
        self.reconcile(&resolved)
    }

    pub fn reconcile(&self, resolved: &Resolved) -> CommitDecision {
        self.reconciler()
            .reconcile(self.coordinator.tokens(), resolved, Instant::now())
    }

    pub fn is_loading(&self, surface: Surface) -> bool {
        self.coordinator.is_loading(surface)
    }

    /// Snapshot of what `surface` displays.
    pub fn view(&self, surface: Surface) -> ViewState {
        self.reconciler().view(surface).clone()
    }

    pub fn visible_notices(&self) -> Vec<Notice> {
        self.reconciler().notices_mut().visible(Instant::now()).to_vec()
    }

    pub fn sort(&self, surface: Surface, key: SortKey) {
        self.reconciler().sort(surface, key);
    }

    pub fn focus(&self, surface: Surface, index: usize) -> Result<bool> {
        self.reconciler().focus(surface, index)
    }

    pub fn surface_shown(&self, surface: Surface) {
        self.reconciler().surface_shown(surface);
    }
}
