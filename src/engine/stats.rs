//! Read-only roster statistics.

use crate::core::store::RosterStore;

/// Aggregate check-in progress derived from roster state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterStats {
    /// Number of roster entries.
    pub total_entries: usize,
    /// Entries already checked in.
    pub checked_in_entries: usize,
    /// Sum of party sizes across all entries.
    pub total_guest_count: u64,
    /// Sum of party sizes across checked-in entries.
    pub checked_in_guest_count: u64,
}

impl RosterStats {
    /// Computes statistics for the current roster in one pass.
    pub fn of(store: &RosterStore) -> Self {
        let mut stats = Self::default();
        for guest in store.iter() {
            stats.total_entries += 1;
            stats.total_guest_count += u64::from(guest.party_size);
            if guest.checked_in {
                stats.checked_in_entries += 1;
                stats.checked_in_guest_count += u64::from(guest.party_size);
            }
        }
        stats
    }

    /// Checked-in entry percentage, 0.0 for an empty roster.
    pub fn percentage(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            self.checked_in_entries as f64 / self.total_entries as f64 * 100.0
        }
    }

    /// Percentage rendered with one decimal place, e.g. `42.9%`.
    pub fn percentage_display(&self) -> String {
        format!("{:.1}%", self.percentage())
    }

    /// One-line progress summary, e.g. `Checked In: 3/10 (7/23 guests)`.
    pub fn progress_line(&self) -> String {
        format!(
            "Checked In: {}/{} ({}/{} guests)",
            self.checked_in_entries,
            self.total_entries,
            self.checked_in_guest_count,
            self.total_guest_count,
        )
    }
}
