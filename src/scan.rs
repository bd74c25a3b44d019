//! QR payload decoding for the two supported wire formats.

use serde::Deserialize;
use thiserror::Error;

use crate::types::PartySize;

/// Decoded scan ready for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCandidate {
    /// Guest identifier carried by the payload, possibly empty.
    pub id: String,
    /// Guest name.
    pub name: String,
    /// Party size claimed by the payload.
    pub party_size: PartySize,
}

/// Scan decode failure, surfaced to callers as an invalid code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanParseError {
    /// A piped payload had fewer than three segments.
    #[error("piped payload needs id|name|partySize segments")]
    PipeSegments,
    /// A piped payload carried a non-numeric party-size segment.
    #[error("piped payload party size {0:?} is not a non-negative integer")]
    PipePartySize(String),
    /// A structured payload was not a JSON object with `name` and `guests`.
    #[error("structured payload rejected: {0}")]
    Structured(String),
}

/// Wire encoding of a scan payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Positional `id|name|partySize`.
    Piped,
    /// JSON object with required `name` and `guests`, optional `id`.
    Structured,
}

impl WireFormat {
    /// Picks the encoding for a raw payload.
    ///
    /// A pipe anywhere in the payload commits to [`WireFormat::Piped`]; a
    /// malformed piped payload is then a hard error, never retried as
    /// structured.
    pub fn sniff(raw: &str) -> Self {
        if raw.contains('|') {
            Self::Piped
        } else {
            Self::Structured
        }
    }
}

#[derive(Debug, Deserialize)]
struct StructuredPayload {
    #[serde(default)]
    id: String,
    name: String,
    guests: PartySize,
}

/// Decodes a raw scan string into a [`ScanCandidate`].
pub fn parse_payload(raw: &str) -> Result<ScanCandidate, ScanParseError> {
    match WireFormat::sniff(raw) {
        WireFormat::Piped => parse_piped(raw),
        WireFormat::Structured => parse_structured(raw),
    }
}

fn parse_piped(raw: &str) -> Result<ScanCandidate, ScanParseError> {
    let parts: Vec<&str> = raw.split('|').collect();
    if parts.len() < 3 {
        return Err(ScanParseError::PipeSegments);
    }
    let party_size = parts[2]
        .parse()
        .map_err(|_| ScanParseError::PipePartySize(parts[2].to_string()))?;
    Ok(ScanCandidate {
        id: parts[0].to_string(),
        name: parts[1].to_string(),
        party_size,
    })
}

fn parse_structured(raw: &str) -> Result<ScanCandidate, ScanParseError> {
    let payload: StructuredPayload =
        serde_json::from_str(raw).map_err(|err| ScanParseError::Structured(err.to_string()))?;
    Ok(ScanCandidate {
        id: payload.id,
        name: payload.name,
        party_size: payload.guests,
    })
}
