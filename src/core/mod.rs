//! In-memory authoritative roster store and index helpers.

/// Helper index aliases.
pub mod indices;
/// Authoritative roster store.
pub mod store;
