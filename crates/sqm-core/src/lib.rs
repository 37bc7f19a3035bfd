//! # sqm-core
//!
//! Core types and pure transforms for sqmark.
//!
//! This crate provides everything that does not touch storage:
//! - The `Marker` record and the closed `StructureType` set
//! - Parsing of the map's `#world;layer;X,Y,Z;zoom` location fragment
//! - Coercion of loosely-typed import payloads into markers
//! - The `xz`, `csv` and `json` export renderers
//! - The live status line shown while following the map
//! - Response types returned by `sqm` commands

pub mod coerce;
pub mod errors;
pub mod export;
pub mod marker;
pub mod responses;
pub mod source;
pub mod status;
pub mod structure;

pub use coerce::{Coerced, ImportBatch, Rejection};
pub use errors::{CoreError, ImportError};
pub use export::ExportFormat;
pub use marker::Marker;
pub use source::ParsedCoordinates;
pub use structure::StructureType;

/// Storage key the map overlay keeps its markers under.
pub const DEFAULT_STORAGE_KEY: &str = "squaremap_structures_v21";

/// Current wall-clock time in epoch milliseconds, the unit of `Marker::created_at`.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
