//! CSV codec for roster import and check-in result export.
//!
//! The wire format is deliberately naive: rows split on `,` with one
//! surrounding quote pair stripped per field, no escaping.

use chrono::{Local, TimeZone};
use thiserror::Error;

use crate::{
    guest::{GuestDraft, GuestRecord},
    types::EpochMillis,
};

/// Header row emitted by [`export_roster`].
pub const EXPORT_HEADER: &str = "Name,Guests,Email,Checked In,Check In Time";

/// Import failure. Any variant aborts the whole import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvImportError {
    /// A data row carried a party-size field that is not a positive integer.
    #[error("line {line}: party size {value:?} is not a positive integer")]
    BadPartySize {
        /// 1-based line number within the import text.
        line: usize,
        /// Offending raw field.
        value: String,
    },
}

/// Parses import text into guest drafts.
///
/// The first line is a header and is always discarded, whatever it contains.
/// Blank-after-trim lines are skipped, as are rows with fewer than two
/// comma-separated fields (malformed rows are dropped, not fatal). A row
/// whose party-size field is not a positive integer aborts the import
/// instead; callers must leave the roster untouched until this returns `Ok`.
pub fn parse_roster(text: &str) -> Result<Vec<GuestDraft>, CsvImportError> {
    let mut drafts = Vec::new();
    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            continue;
        }
        let name = strip_quotes(fields[0].trim()).to_string();
        let party_raw = fields[1].trim();
        let party_size = match party_raw.parse() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(CsvImportError::BadPartySize {
                    line: idx + 1,
                    value: party_raw.to_string(),
                });
            }
        };
        let email = fields
            .get(2)
            .map(|f| strip_quotes(f.trim()).to_string())
            .unwrap_or_default();
        drafts.push(GuestDraft {
            name,
            party_size,
            email,
        });
    }
    Ok(drafts)
}

/// Serializes check-in results to export CSV, one row per roster entry in
/// roster order.
///
/// Name and email are quote-wrapped; the checked-in column is `Yes` or `No`;
/// the time column is empty unless the entry is checked in, in which case it
/// carries the local check-in time as `yyyy-MM-dd HH:mm:ss`.
pub fn export_roster(guests: &[GuestRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for guest in guests {
        out.push_str(&format!(
            "\"{}\",{},\"{}\",{},",
            guest.name,
            guest.party_size,
            guest.email,
            if guest.checked_in { "Yes" } else { "No" },
        ));
        if guest.checked_in {
            out.push_str(&format_check_in_time(guest.check_in_ts_ms));
        }
        out.push('\n');
    }
    out
}

/// Formats a check-in timestamp as local `yyyy-MM-dd HH:mm:ss`.
pub fn format_check_in_time(ts_ms: EpochMillis) -> String {
    Local
        .timestamp_millis_opt(ts_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn strip_quotes(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(field)
}
