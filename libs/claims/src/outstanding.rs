//! Outstanding-claim store
//!
//! Process-wide keyed state mapping each position to its 256-bit
//! outstanding-claim map. Entries come into existence lazily on first
//! mutation (an absent entry is identical to an all-zero map) and are never
//! deleted; a fully cleared map simply stays empty.
//!
//! `try_mark` and `clear` are the only mutation points and both are atomic
//! over the entry, so the "one flag update per (position, claim type) pair"
//! rule holds even with concurrent callers. No entry guard is ever held
//! across a collaborator call.

use dashmap::DashMap;
use tracing::trace;
use types::{ClaimBitmap, ClaimTypeId, PositionId};

#[derive(Debug, Default)]
pub struct OutstandingClaims {
    bitmaps: DashMap<PositionId, ClaimBitmap>,
}

impl OutstandingClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the position's current map (all-zero when never touched).
    pub fn snapshot(&self, position: PositionId) -> ClaimBitmap {
        self.bitmaps
            .get(&position)
            .map(|map| *map)
            .unwrap_or(ClaimBitmap::EMPTY)
    }

    /// True iff the claim is currently outstanding.
    pub fn is_outstanding(&self, position: PositionId, claim_type: ClaimTypeId) -> bool {
        self.snapshot(position).is_set(claim_type)
    }

    /// True iff the position holds no outstanding claim at all.
    pub fn is_empty(&self, position: PositionId) -> bool {
        self.snapshot(position).is_empty()
    }

    /// Set the flag for `(position, claim_type)`.
    ///
    /// Returns `false` when the flag was already set, leaving the map
    /// untouched. This is the duplicate-create detection point and runs
    /// before any external issuance call, so a reentrant create against the
    /// same pair observes the flag.
    pub fn try_mark(&self, position: PositionId, claim_type: ClaimTypeId) -> bool {
        let mut entry = self.bitmaps.entry(position).or_insert(ClaimBitmap::EMPTY);
        if entry.is_set(claim_type) {
            return false;
        }
        *entry = entry.with_set(claim_type);
        trace!(%position, %claim_type, "marked claim outstanding");
        true
    }

    /// Clear the flag for `(position, claim_type)`.
    ///
    /// Returns `false` when the flag was not set.
    pub fn clear(&self, position: PositionId, claim_type: ClaimTypeId) -> bool {
        match self.bitmaps.get_mut(&position) {
            Some(mut entry) if entry.is_set(claim_type) => {
                *entry = entry.with_cleared(claim_type);
                trace!(%position, %claim_type, "cleared outstanding claim");
                true
            }
            _ => false,
        }
    }
}
