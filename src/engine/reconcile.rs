//! Scan reconciliation against the roster.

use crate::{
    core::store::{RosterStore, Transition},
    guest::GuestRecord,
    scan::ScanCandidate,
    types::{EpochMillis, GuestId},
};

/// Terminal outcome of reconciling one scan.
///
/// Every variant is a reportable value, never an error: a duplicate scan is
/// distinguished from a fresh check-in so callers can word their messaging,
/// and an unmatched payload simply reports [`ReconcileOutcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The matched record transitioned to checked in.
    CheckedIn(GuestRecord),
    /// The matched record had already been checked in; nothing changed.
    AlreadyCheckedIn(GuestRecord),
    /// No roster record matched the candidate.
    NotFound,
}

impl ReconcileOutcome {
    /// True when this outcome mutated the roster and should be persisted.
    pub fn mutated(&self) -> bool {
        matches!(self, Self::CheckedIn(_))
    }
}

/// Resolves the roster id a candidate should check in, if any.
///
/// A non-empty candidate id is tried first; when it hits, the name and party
/// fallback is never consulted for that call. Candidates without an id, or
/// whose id is unknown, fall back to case-insensitive name plus exact party
/// size, first match in roster order.
pub fn match_candidate(store: &RosterStore, candidate: &ScanCandidate) -> Option<GuestId> {
    if !candidate.id.is_empty() {
        if let Some(rec) = store.get(&candidate.id) {
            return Some(rec.id.clone());
        }
    }
    store
        .find_by_name_party(&candidate.name, candidate.party_size)
        .map(|rec| rec.id.clone())
}

/// Matches a candidate and applies the at-most-once check-in transition.
///
/// Repeated reconciliation against an already-checked-in record is a safe
/// no-op: it reports [`ReconcileOutcome::AlreadyCheckedIn`] and never writes
/// a second timestamp.
pub fn reconcile(
    store: &mut RosterStore,
    candidate: &ScanCandidate,
    now_ms: EpochMillis,
) -> ReconcileOutcome {
    let Some(id) = match_candidate(store, candidate) else {
        return ReconcileOutcome::NotFound;
    };
    // The id was just resolved from this store, so a miss means the roster
    // changed underneath us; report it as not found.
    let transition = match store.check_in(&id, now_ms) {
        Ok(t) => t,
        Err(_) => return ReconcileOutcome::NotFound,
    };
    match store.get_cloned(&id) {
        Some(rec) => match transition {
            Transition::Applied => ReconcileOutcome::CheckedIn(rec),
            Transition::AlreadyCheckedIn => ReconcileOutcome::AlreadyCheckedIn(rec),
        },
        None => ReconcileOutcome::NotFound,
    }
}
