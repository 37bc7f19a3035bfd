//! The recorded point of interest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::source::ParsedCoordinates;
use crate::structure::StructureType;

/// One recorded structure on the map.
///
/// Field names on the wire match the storage record written by the map
/// overlay (`maptype`, `zoom`, `ts`). The camelCase names are accepted as
/// aliases when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Marker {
    pub x: f64,
    pub z: f64,
    #[serde(rename = "type")]
    #[schemars(with = "String")]
    pub kind: StructureType,
    pub label: String,
    #[serde(default)]
    pub world: String,
    #[serde(rename = "maptype", alias = "mapLayer", default)]
    pub map_layer: String,
    #[serde(rename = "zoom", alias = "zoomLevel", default)]
    pub zoom_level: u32,
    #[serde(rename = "ts", alias = "createdAt")]
    pub created_at: i64,
}

impl Marker {
    /// Build a marker from a parsed location. A blank `label` is replaced by
    /// [`default_label`].
    #[must_use]
    pub fn from_coordinates(
        kind: StructureType,
        label: &str,
        coords: &ParsedCoordinates,
        created_at: i64,
    ) -> Self {
        let label = match label.trim() {
            "" => default_label(&kind, coords.x, coords.z),
            given => given.to_string(),
        };
        Self {
            x: coords.x,
            z: coords.z,
            kind,
            label,
            world: coords.world.clone(),
            map_layer: coords.map_layer.clone(),
            zoom_level: coords.zoom,
            created_at,
        }
    }

    /// X rounded for display and export.
    #[must_use]
    pub fn rounded_x(&self) -> i64 {
        round_coord(self.x)
    }

    /// Z rounded for display and export.
    #[must_use]
    pub fn rounded_z(&self) -> i64 {
        round_coord(self.z)
    }
}

/// `"<type> @ <x>, <z>"` with underscores in the type spaced out and the
/// coordinates rounded.
#[must_use]
pub fn default_label(kind: &StructureType, x: f64, z: f64) -> String {
    format!("{} @ {}, {}", kind.spaced(), round_coord(x), round_coord(z))
}

/// Round to the nearest integer, halves toward positive infinity
/// (`-50.5` rounds to `-50`, `2.5` to `3`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_coord(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
