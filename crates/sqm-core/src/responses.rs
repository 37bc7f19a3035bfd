//! Response types returned as JSON by `sqm` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// Response from `sqm add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AddResponse {
    pub marker: Marker,
    pub total: usize,
}

/// A record dropped during `sqm import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RejectedRecord {
    pub index: usize,
    pub field: String,
    pub reason: String,
}

/// Response from `sqm import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub imported: usize,
    pub rejected: Vec<RejectedRecord>,
}

/// Response from `sqm clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClearResponse {
    pub cleared: usize,
}

/// Response from `sqm status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub markers: usize,
}

/// One row of `sqm types`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StructureTypeEntry {
    pub name: String,
    pub display_name: String,
}
