//! Shared primitive aliases for roster entities.

/// Stable guest identifier, unique within one roster.
pub type GuestId = String;
/// Number of people a roster entry covers.
pub type PartySize = u32;
/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;
