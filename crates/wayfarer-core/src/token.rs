// crates/wayfarer-core/src/token.rs

//! # Request Tokens
//!
//! One slot per [`Surface`]. Minting a token makes it the slot's *current*
//! token and thereby invalidates every earlier one, whether or not the
//! earlier request's transport can actually be aborted.
//!
//! The slot also tracks which token owns the surface's loading indicator:
//! a superseded request that finishes late releases nothing, so the newest
//! request's "loading" stays on until it ends itself.

use crate::common::Surface;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

/// Identity of one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    surface: Surface,
    seq: u64,
}

impl RequestToken {
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Monotonic across all surfaces; later tokens have larger values.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A freshly minted token plus the signal fired if it is superseded.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub token: RequestToken,
    pub abort: CancellationToken,
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<RequestToken>,
    abort: Option<CancellationToken>,
    loading_owner: Option<u64>,
}

#[derive(Debug, Default)]
pub struct TokenRegistry {
    next_seq: AtomicU64,
    home: Mutex<Slot>,
    region: Mutex<Slot>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, surface: Surface) -> MutexGuard<'_, Slot> {
        let slot = match surface {
            Surface::Home => &self.home,
            Surface::RegionBrowse => &self.region,
        };
        // Slot state is plain data; a panic elsewhere cannot leave it torn.
        slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint the surface's new current token and turn its loading flag on.
    ///
    /// With `abort_previous`, the superseded token's abort signal fires.
    pub fn supersede(&self, surface: Surface, abort_previous: bool) -> Ticket {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let token = RequestToken { surface, seq };
        let abort = CancellationToken::new();

        let mut slot = self.slot(surface);
        if let Some(previous) = slot.abort.replace(abort.clone()) {
            if abort_previous {
                previous.cancel();
            }
        }
        slot.current = Some(token);
        slot.loading_owner = Some(seq);

        Ticket { token, abort }
    }

    /// Release whatever `token` still owns. Safe to call for stale tokens.
    pub fn finish(&self, token: RequestToken) {
        let mut slot = self.slot(token.surface);
        if slot.loading_owner == Some(token.seq) {
            slot.loading_owner = None;
        }
        if slot.current == Some(token) {
            slot.abort = None;
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.slot(token.surface).current == Some(token)
    }

    pub fn current(&self, surface: Surface) -> Option<RequestToken> {
        self.slot(surface).current
    }

    pub fn is_loading(&self, surface: Surface) -> bool {
        self.slot(surface).loading_owner.is_some()
    }
}
