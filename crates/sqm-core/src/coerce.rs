//! Coercion of loosely-typed import payloads.
//!
//! Import accepts whatever JSON a user pastes, as long as it is an array of
//! objects. Each object is coerced field by field:
//!
//! | field                 | accepts                         | default            |
//! |-----------------------|---------------------------------|--------------------|
//! | `x`, `z`              | number, numeric string          | rejected           |
//! | `type`                | non-blank string, number, bool  | `structure`        |
//! | `label`               | non-blank string, number, bool  | computed label     |
//! | `world`               | non-empty string, number, bool  | empty              |
//! | `maptype`/`mapLayer`  | non-empty string, number, bool  | empty              |
//! | `zoom`/`zoomLevel`    | non-negative number             | `0`                |
//! | `ts`/`createdAt`      | non-zero number                 | import time        |
//!
//! `type` and `label` are trimmed first, so whitespace-only values take the
//! default.
//!
//! A record whose `x` or `z` does not coerce to a finite number is rejected;
//! the rest of the batch still goes through.

use serde_json::{Map, Value};

use crate::errors::{ImportError, json_kind};
use crate::marker::{Marker, default_label};
use crate::structure::{DEFAULT_IMPORT_TYPE, StructureType};

/// Outcome of coercing one import element.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Accepted(Marker),
    Rejected(Rejection),
}

/// Why a single element was dropped from an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub index: usize,
    pub field: &'static str,
    pub reason: String,
}

/// The accepted markers of an import, in input order, plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    pub markers: Vec<Marker>,
    pub rejected: Vec<Rejection>,
}

/// Parse and coerce a pasted import payload.
///
/// # Errors
///
/// Returns `ImportError` if the text is not JSON, or not an array of objects.
pub fn parse_payload(text: &str, now: i64) -> Result<ImportBatch, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    coerce_payload(&value, now)
}

/// Coerce an already-parsed payload.
///
/// # Errors
///
/// Returns `ImportError` if the value is not an array of objects.
pub fn coerce_payload(value: &Value, now: i64) -> Result<ImportBatch, ImportError> {
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray {
            found: json_kind(value),
        });
    };

    let mut objects = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(ImportError::NotAnObject {
                index,
                found: json_kind(item),
            });
        };
        objects.push(map);
    }

    let mut batch = ImportBatch::default();
    for (index, map) in objects.into_iter().enumerate() {
        match coerce_record(index, map, now) {
            Coerced::Accepted(marker) => batch.markers.push(marker),
            Coerced::Rejected(rejection) => {
                tracing::warn!(
                    index = rejection.index,
                    field = rejection.field,
                    reason = %rejection.reason,
                    "dropping import record"
                );
                batch.rejected.push(rejection);
            }
        }
    }
    Ok(batch)
}

/// Coerce one import object into a marker.
#[must_use]
pub fn coerce_record(index: usize, map: &Map<String, Value>, now: i64) -> Coerced {
    let x = match coerce_coordinate(map.get("x")) {
        Ok(x) => x,
        Err(reason) => {
            return Coerced::Rejected(Rejection {
                index,
                field: "x",
                reason,
            });
        }
    };
    let z = match coerce_coordinate(map.get("z")) {
        Ok(z) => z,
        Err(reason) => {
            return Coerced::Rejected(Rejection {
                index,
                field: "z",
                reason,
            });
        }
    };

    let kind = StructureType::parse(
        &coerce_trimmed(map.get("type")).unwrap_or_else(|| DEFAULT_IMPORT_TYPE.to_string()),
    );
    let label = coerce_trimmed(map.get("label")).unwrap_or_else(|| default_label(&kind, x, z));

    Coerced::Accepted(Marker {
        x,
        z,
        kind,
        label,
        world: coerce_string(map.get("world")).unwrap_or_default(),
        map_layer: coerce_string(first_present(map, &["maptype", "mapLayer"])).unwrap_or_default(),
        zoom_level: coerce_zoom(first_present(map, &["zoom", "zoomLevel"])),
        created_at: coerce_timestamp(first_present(map, &["ts", "createdAt"])).unwrap_or(now),
    })
}

fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

fn coerce_coordinate(value: Option<&Value>) -> Result<f64, String> {
    let Some(raw) = value else {
        return Err(String::from("missing"));
    };
    match coerce_number(Some(raw)) {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(format!("not a finite number: {raw}")),
    }
}

fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn coerce_trimmed(value: Option<&Value>) -> Option<String> {
    coerce_string(value)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_zoom(value: Option<&Value>) -> u32 {
    coerce_number(value)
        .filter(|zoom| zoom.is_finite() && *zoom >= 0.0)
        .map_or(0, |zoom| zoom as u32)
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_timestamp(value: Option<&Value>) -> Option<i64> {
    coerce_number(value)
        .filter(|ts| ts.is_finite() && *ts != 0.0)
        .map(|ts| ts as i64)
}
