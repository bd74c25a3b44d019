//! Guest roster records, import drafts, and the check-in transition.

use serde::{Deserialize, Serialize};

use crate::types::{EpochMillis, GuestId, PartySize};

/// Fully materialized roster entry.
///
/// Immutable by convention: the only mutation the crate performs after import
/// is the one-way [`GuestRecord::check_in`] transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Stable identifier assigned at import.
    pub id: GuestId,
    /// Guest name as it appeared in the import file.
    pub name: String,
    /// Number of people this entry covers, at least 1 for imported records.
    pub party_size: PartySize,
    /// Contact email, empty when the import row had none.
    pub email: String,
    /// True once the entry has been checked in.
    pub checked_in: bool,
    /// Check-in timestamp in epoch milliseconds, meaningful only when
    /// `checked_in` is true.
    pub check_in_ts_ms: EpochMillis,
}

impl GuestRecord {
    /// Builds an unchecked record from an import draft and its assigned id.
    pub fn from_draft(id: GuestId, draft: GuestDraft) -> Self {
        Self {
            id,
            name: draft.name,
            party_size: draft.party_size,
            email: draft.email,
            checked_in: false,
            check_in_ts_ms: 0,
        }
    }

    /// Applies the one-way check-in transition.
    ///
    /// Returns true when the transition fired. A record that is already
    /// checked in is left untouched, timestamp included, and false is
    /// returned.
    pub fn check_in(&mut self, now_ms: EpochMillis) -> bool {
        if self.checked_in {
            return false;
        }
        self.checked_in = true;
        self.check_in_ts_ms = now_ms;
        true
    }
}

/// Parsed import row before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    /// Guest name.
    pub name: String,
    /// Party size, at least 1.
    pub party_size: PartySize,
    /// Contact email, empty when absent.
    pub email: String,
}
