//! Inbound payload shape and parsing.
//!
//! The payload is a JSON array of records, each with an ordered `data`
//! field mapping and an optional `children` mapping of group name to a
//! `records` array of the same shape, recursively:
//!
//! ```json
//! [{"data": {"ID": 1, "Name": "A"},
//!   "children": {"kids": {"records": [{"data": {"ID": 2, "Name": "B"}}]}}}]
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::value::FieldValue;

/// One record as it appears on the wire, before ids are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    /// Ordered field mapping; order feeds header derivation.
    pub data: IndexMap<String, FieldValue>,
    /// Named child groups; absent key means no children.
    #[serde(default)]
    pub children: IndexMap<String, RawGroup>,
}

/// A named group's payload: its ordered record list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGroup {
    #[serde(default)]
    pub records: Vec<RawNode>,
}

/// Parse a JSON byte payload into the raw tree shape.
///
/// Anything that does not match the shape (top level not an array, field
/// values that are not scalars, `records` not an array) is a load failure.
pub fn parse_payload(bytes: &[u8]) -> StoreResult<Vec<RawNode>> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::MalformedPayload(e.to_string()))
}
