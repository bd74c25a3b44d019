//! Offline guest roster and check-in reconciliation with SQLite-backed
//! persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::RosterStore`]:
//! ```
//! use rollcall::{
//!     core::store::RosterStore,
//!     engine::reconcile::{reconcile, ReconcileOutcome},
//!     guest::{GuestDraft, GuestRecord},
//!     scan::ScanCandidate,
//! };
//!
//! let mut store = RosterStore::new();
//! store.replace_all(
//!     vec![GuestRecord::from_draft(
//!         "63350368_1719238455".to_string(),
//!         GuestDraft {
//!             name: "Alice".to_string(),
//!             party_size: 2,
//!             email: String::new(),
//!         },
//!     )],
//!     "Launch Party",
//! );
//!
//! let candidate = ScanCandidate {
//!     id: String::new(),
//!     name: "alice".to_string(),
//!     party_size: 2,
//! };
//! let outcome = reconcile(&mut store, &candidate, 1_719_240_000_000);
//! assert!(matches!(outcome, ReconcileOutcome::CheckedIn(_)));
//! ```
//!
//! Desk usage with a SQLite store:
//! ```
//! use rollcall::{desk::CheckInDesk, persist::sqlite::SqliteKvStore};
//!
//! let kv = SqliteKvStore::open_in_memory().expect("open sqlite");
//! let mut desk = CheckInDesk::open(kv).expect("load");
//! let imported = desk
//!     .import_csv("Name,Guests,Email\nAlice,2,alice@example.com\n", "Launch Party")
//!     .expect("import");
//! assert_eq!(imported, 1);
//!
//! let outcome = desk.scan(r#"{"name": "Alice", "guests": 2}"#).expect("scan");
//! assert!(outcome.mutated());
//! assert_eq!(desk.stats().checked_in_entries, 1);
//! ```
#![deny(missing_docs)]

/// Core in-memory roster store and index helpers.
pub mod core;
/// CSV import/export codec.
pub mod csv;
/// Check-in desk facade over store plus persistence.
pub mod desk;
/// Reconciliation and statistics over the roster.
pub mod engine;
/// Guest records and import drafts.
pub mod guest;
/// Import-time identifier derivation.
pub mod ident;
/// Persistence abstraction and SQLite implementation.
pub mod persist;
/// QR scan payload parsing.
pub mod scan;
/// Shared primitive aliases.
pub mod types;
