//! Check-in desk facade tying the roster store to durable persistence.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::{
    core::store::{DEFAULT_EVENT_NAME, RosterSnapshotV1, RosterStore},
    csv::{self, CsvImportError},
    engine::{
        reconcile::{ReconcileOutcome, reconcile},
        stats::RosterStats,
    },
    guest::GuestRecord,
    ident,
    persist::{KvStore, PersistError},
    scan::{self, ScanParseError},
    types::EpochMillis,
};

/// Key under which the serialized roster lives in the durable store.
pub const GUESTS_KEY: &str = "guests";
/// Key under which the event name lives in the durable store.
pub const EVENT_NAME_KEY: &str = "event_name";

/// Desk operation failure.
///
/// Reconciliation outcomes (`NotFound`, `AlreadyCheckedIn`) are values, not
/// errors; only undecodable input and persistence failures land here.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Import text rejected; the prior roster is untouched.
    #[error(transparent)]
    Import(#[from] CsvImportError),
    /// Scan payload rejected; the roster is untouched.
    #[error(transparent)]
    Scan(#[from] ScanParseError),
    /// Durable-store read or write failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Synchronous check-in desk.
///
/// Owns the in-memory roster and one durable store, persisting after every
/// mutation. Every operation runs to completion before the next; the desk
/// provides no locking of its own, so callers embedding it in a concurrent
/// environment must serialize `import_csv` and `scan` themselves.
pub struct CheckInDesk<S: KvStore> {
    store: RosterStore,
    kv: S,
}

impl<S: KvStore> CheckInDesk<S> {
    /// Opens a desk over `kv`, loading any previously persisted roster.
    ///
    /// Missing or unreadable persisted state yields an empty roster rather
    /// than an error.
    pub fn open(kv: S) -> Result<Self, DeskError> {
        let guests_json = kv.get_string(GUESTS_KEY, "[]")?;
        let event_name = kv.get_string(EVENT_NAME_KEY, DEFAULT_EVENT_NAME)?;
        let guests: Vec<GuestRecord> = serde_json::from_str(&guests_json).unwrap_or_default();
        let store = RosterStore::from_snapshot(RosterSnapshotV1 { event_name, guests });
        Ok(Self { store, kv })
    }

    /// Imports a roster from CSV text, replacing all prior entries, and
    /// returns the number of imported entries.
    ///
    /// All rows of one batch share a single import timestamp, so their ids
    /// are stable within the batch; re-importing the same CSV later mints
    /// fresh ids and resets all check-in state. A party-size parse failure
    /// aborts the import and leaves the previous roster in place.
    pub fn import_csv(&mut self, text: &str, event_name: &str) -> Result<usize, DeskError> {
        let drafts = csv::parse_roster(text)?;
        let batch_secs = now_ms() / 1000;
        let guests: Vec<GuestRecord> = drafts
            .into_iter()
            .map(|draft| {
                let id = ident::guest_id(&draft.name, draft.party_size, batch_secs);
                GuestRecord::from_draft(id, draft)
            })
            .collect();
        self.store.replace_all(guests, event_name);
        self.persist_roster()?;
        self.kv.put_string(EVENT_NAME_KEY, event_name)?;
        Ok(self.store.len())
    }

    /// Decodes a scan payload and reconciles it against the roster.
    ///
    /// Persists only when a check-in transition actually fired.
    pub fn scan(&mut self, raw: &str) -> Result<ReconcileOutcome, DeskError> {
        let candidate = scan::parse_payload(raw)?;
        let outcome = reconcile(&mut self.store, &candidate, now_ms());
        if outcome.mutated() {
            self.persist_roster()?;
        }
        Ok(outcome)
    }

    /// Serializes the full roster to export CSV in roster order.
    pub fn export_csv(&self) -> String {
        csv::export_roster(&self.store.guests())
    }

    /// Current roster statistics.
    pub fn stats(&self) -> RosterStats {
        RosterStats::of(&self.store)
    }

    /// Defensive copy of the roster in import order.
    pub fn guests(&self) -> Vec<GuestRecord> {
        self.store.guests()
    }

    /// Event name associated with the current roster.
    pub fn event_name(&self) -> &str {
        self.store.event_name()
    }

    /// Header line for scanner displays, e.g. `Event: Gala (12 entries)`.
    pub fn event_line(&self) -> String {
        format!(
            "Event: {} ({} entries)",
            self.store.event_name(),
            self.store.len()
        )
    }

    /// Empties the roster and wipes the durable store.
    pub fn clear_all(&mut self) -> Result<(), DeskError> {
        self.store.clear();
        self.kv.clear()?;
        Ok(())
    }

    fn persist_roster(&mut self) -> Result<(), DeskError> {
        let json = serde_json::to_string(&self.store.guests()).map_err(PersistError::from)?;
        self.kv.put_string(GUESTS_KEY, &json)?;
        Ok(())
    }
}

fn now_ms() -> EpochMillis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as EpochMillis)
        .unwrap_or(0)
}
