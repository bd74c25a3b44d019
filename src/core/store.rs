//! Authoritative in-memory roster store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::indices::IdIndex,
    guest::GuestRecord,
    types::{EpochMillis, GuestId, PartySize},
};

/// Event name reported before any roster has been imported.
pub const DEFAULT_EVENT_NAME: &str = "Event";

/// Store-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No roster record carries the given id.
    #[error("no guest with id {0:?}")]
    MissingGuest(GuestId),
}

/// Result of a check-in transition attempt on a found record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The record flipped to checked in and its timestamp was set.
    Applied,
    /// The record was already checked in; nothing changed.
    AlreadyCheckedIn,
}

/// Serializable roster state handed to the durable store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshotV1 {
    /// Event name associated with the roster.
    pub event_name: String,
    /// Records in roster (import) order.
    pub guests: Vec<GuestRecord>,
}

/// Ordered roster plus id index.
///
/// Owns all records exclusively; accessors that return records hand out
/// clones, so the only way to mutate roster state is [`RosterStore::check_in`]
/// or a full replacement.
#[derive(Debug, Default)]
pub struct RosterStore {
    records: Vec<GuestRecord>,
    by_id: IdIndex,
    event_name: String,
}

impl RosterStore {
    /// Creates an empty store with the default event name.
    pub fn new() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            ..Self::default()
        }
    }

    /// Rebuilds a store from a persisted snapshot, restoring the id index.
    pub fn from_snapshot(snapshot: RosterSnapshotV1) -> Self {
        let mut store = Self {
            records: snapshot.guests,
            by_id: IdIndex::default(),
            event_name: snapshot.event_name,
        };
        store.rebuild_index();
        store
    }

    /// Exports the current state for persistence.
    pub fn snapshot(&self) -> RosterSnapshotV1 {
        RosterSnapshotV1 {
            event_name: self.event_name.clone(),
            guests: self.records.clone(),
        }
    }

    /// Replaces the entire roster and event name. Import is destructive,
    /// never a merge.
    pub fn replace_all(&mut self, guests: Vec<GuestRecord>, event_name: impl Into<String>) {
        self.records = guests;
        self.event_name = event_name.into();
        self.rebuild_index();
    }

    /// Empties the roster and resets the event name.
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_id.clear();
        self.event_name = DEFAULT_EVENT_NAME.to_string();
    }

    /// Looks a record up by id.
    pub fn get(&self, id: &str) -> Option<&GuestRecord> {
        self.by_id.get(id).and_then(|&pos| self.records.get(pos))
    }

    /// Looks a record up by id, cloning it.
    pub fn get_cloned(&self, id: &str) -> Option<GuestRecord> {
        self.get(id).cloned()
    }

    /// Finds the first record, in roster order, whose name matches case
    /// insensitively and whose party size matches exactly.
    pub fn find_by_name_party(&self, name: &str, party_size: PartySize) -> Option<&GuestRecord> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .find(|g| g.party_size == party_size && g.name.to_lowercase() == needle)
    }

    /// Attempts the at-most-once check-in transition on the record with `id`.
    pub fn check_in(&mut self, id: &str, now_ms: EpochMillis) -> Result<Transition, StoreError> {
        let pos = *self
            .by_id
            .get(id)
            .ok_or_else(|| StoreError::MissingGuest(id.to_string()))?;
        let rec = self
            .records
            .get_mut(pos)
            .ok_or_else(|| StoreError::MissingGuest(id.to_string()))?;
        if rec.check_in(now_ms) {
            Ok(Transition::Applied)
        } else {
            Ok(Transition::AlreadyCheckedIn)
        }
    }

    /// Defensive copy of the roster in import order.
    pub fn guests(&self) -> Vec<GuestRecord> {
        self.records.clone()
    }

    /// Iterates records in roster order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &GuestRecord> {
        self.records.iter()
    }

    /// Number of roster entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the roster holds no entries.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Event name associated with the current roster.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    fn rebuild_index(&mut self) {
        self.by_id.clear();
        for (pos, rec) in self.records.iter().enumerate() {
            self.by_id.insert(rec.id.clone(), pos);
        }
    }
}
