use rollcall::{
    core::store::RosterStore,
    desk::{CheckInDesk, DeskError},
    engine::reconcile::{ReconcileOutcome, reconcile},
    guest::{GuestDraft, GuestRecord},
    persist::sqlite::SqliteKvStore,
    scan::{ScanCandidate, ScanParseError, WireFormat, parse_payload},
};

fn record(id: &str, name: &str, party: u32) -> GuestRecord {
    GuestRecord::from_draft(
        id.to_string(),
        GuestDraft {
            name: name.to_string(),
            party_size: party,
            email: String::new(),
        },
    )
}

fn roster(records: Vec<GuestRecord>) -> RosterStore {
    let mut store = RosterStore::new();
    store.replace_all(records, "Test Event");
    store
}

fn candidate(id: &str, name: &str, party: u32) -> ScanCandidate {
    ScanCandidate {
        id: id.to_string(),
        name: name.to_string(),
        party_size: party,
    }
}

#[test]
fn unknown_id_falls_back_to_name_and_party() {
    let mut store = roster(vec![record("A1", "Alice", 2)]);
    let cand = parse_payload("ID123|Alice|2").expect("parse");

    let outcome = reconcile(&mut store, &cand, 100);
    let ReconcileOutcome::CheckedIn(rec) = outcome else {
        panic!("expected CheckedIn, got {outcome:?}");
    };
    assert_eq!(rec.id, "A1");
    assert!(rec.checked_in);
    assert_eq!(rec.check_in_ts_ms, 100);
}

#[test]
fn repeat_scan_is_already_checked_in_with_frozen_timestamp() {
    let mut store = roster(vec![record("A1", "Alice", 2)]);
    let cand = parse_payload("ID123|Alice|2").expect("parse");

    assert!(reconcile(&mut store, &cand, 100).mutated());
    let outcome = reconcile(&mut store, &cand, 200);
    let ReconcileOutcome::AlreadyCheckedIn(rec) = outcome else {
        panic!("expected AlreadyCheckedIn, got {outcome:?}");
    };
    assert_eq!(rec.check_in_ts_ms, 100);
}

#[test]
fn id_match_takes_priority_over_name_and_party() {
    let mut store = roster(vec![record("A1", "Alice", 2), record("B1", "Bob", 3)]);

    // The candidate's name and party would match Alice, but its id names Bob.
    let outcome = reconcile(&mut store, &candidate("B1", "Alice", 2), 100);
    let ReconcileOutcome::CheckedIn(rec) = outcome else {
        panic!("expected CheckedIn, got {outcome:?}");
    };
    assert_eq!(rec.id, "B1");

    let alice = store.get("A1").expect("alice");
    assert!(!alice.checked_in);
}

#[test]
fn name_match_is_case_insensitive_and_party_exact() {
    let mut store = roster(vec![record("A1", "Alice", 2)]);

    let miss = reconcile(&mut store, &candidate("", "ALICE", 3), 100);
    assert_eq!(miss, ReconcileOutcome::NotFound);

    let hit = reconcile(&mut store, &candidate("", "ALICE", 2), 100);
    assert!(hit.mutated());
}

#[test]
fn unmatched_candidate_reports_not_found() {
    let mut store = roster(vec![record("A1", "Alice", 2)]);
    let outcome = reconcile(&mut store, &candidate("", "Mallory", 1), 100);
    assert_eq!(outcome, ReconcileOutcome::NotFound);
    assert!(!store.get("A1").expect("alice").checked_in);
}

#[test]
fn name_fallback_picks_first_match_in_roster_order() {
    let mut store = roster(vec![record("A1", "Alice", 2), record("A2", "alice", 2)]);
    let outcome = reconcile(&mut store, &candidate("", "Alice", 2), 100);
    let ReconcileOutcome::CheckedIn(rec) = outcome else {
        panic!("expected CheckedIn, got {outcome:?}");
    };
    assert_eq!(rec.id, "A1");
}

#[test]
fn pipe_payload_parses_positionally() {
    let cand = parse_payload("93_17|Alice Jones|4").expect("parse");
    assert_eq!(cand, candidate("93_17", "Alice Jones", 4));
}

#[test]
fn pipe_payload_with_empty_id_segment_keeps_empty_id() {
    let cand = parse_payload("|Alice|2").expect("parse");
    assert_eq!(cand.id, "");
}

#[test]
fn malformed_pipe_payload_never_falls_back_to_structured() {
    // Contains a pipe inside a JSON string, so the pipe format is committed
    // to and fails; structured parsing must not be retried.
    let err = parse_payload(r#"{"name":"Alice","guests":2,"note":"a|b"}"#).unwrap_err();
    assert_eq!(err, ScanParseError::PipeSegments);

    let err = parse_payload("Alice|2").unwrap_err();
    assert_eq!(err, ScanParseError::PipeSegments);

    let err = parse_payload("id|Alice|two").unwrap_err();
    assert!(matches!(err, ScanParseError::PipePartySize(_)));
}

#[test]
fn structured_payload_requires_name_and_guests() {
    let cand = parse_payload(r#"{"id":"X7","name":"Alice","guests":2}"#).expect("parse");
    assert_eq!(cand, candidate("X7", "Alice", 2));

    // `id` is optional and defaults to empty.
    let cand = parse_payload(r#"{"name":"Bob","guests":1}"#).expect("parse");
    assert_eq!(cand.id, "");

    assert!(matches!(
        parse_payload(r#"{"name":"Bob"}"#),
        Err(ScanParseError::Structured(_))
    ));
    assert!(matches!(
        parse_payload("not a valid code"),
        Err(ScanParseError::Structured(_))
    ));
}

#[test]
fn format_sniffing_is_decided_by_pipe_presence_alone() {
    assert_eq!(WireFormat::sniff("a|b|c"), WireFormat::Piped);
    assert_eq!(WireFormat::sniff(r#"{"name":"x","guests":1}"#), WireFormat::Structured);
    assert_eq!(WireFormat::sniff(""), WireFormat::Structured);
}

#[test]
fn desk_scan_surfaces_parse_errors_without_mutating() {
    let kv = SqliteKvStore::open_in_memory().expect("open sqlite");
    let mut desk = CheckInDesk::open(kv).expect("open desk");
    desk.import_csv("Name,Guests\nAlice,2\n", "Gala").expect("import");

    let err = desk.scan("not a valid code").unwrap_err();
    assert!(matches!(err, DeskError::Scan(_)));
    assert_eq!(desk.stats().checked_in_entries, 0);
}

#[test]
fn desk_scan_checks_in_then_reports_duplicates() {
    let kv = SqliteKvStore::open_in_memory().expect("open sqlite");
    let mut desk = CheckInDesk::open(kv).expect("open desk");
    desk.import_csv("Name,Guests\nAlice,2\nBob,1\n", "Gala").expect("import");

    let first = desk.scan("X|Alice|2").expect("scan");
    assert!(matches!(first, ReconcileOutcome::CheckedIn(_)));
    let ts = desk.guests()[0].check_in_ts_ms;

    let second = desk.scan("X|Alice|2").expect("scan");
    assert!(matches!(second, ReconcileOutcome::AlreadyCheckedIn(_)));
    assert_eq!(desk.guests()[0].check_in_ts_ms, ts);

    let stats = desk.stats();
    assert_eq!(stats.checked_in_entries, 1);
    assert_eq!(stats.checked_in_guest_count, 2);
    assert_eq!(stats.percentage_display(), "50.0%");
    assert_eq!(stats.progress_line(), "Checked In: 1/2 (2/3 guests)");
}
