//! Check-in matching and roster statistics.

/// Candidate matching and the at-most-once check-in transition.
pub mod reconcile;
/// Read-only statistics derived from roster state.
pub mod stats;
