//! Text export formats.
//!
//! All formats round coordinates with [`round_coord`] and render an empty
//! marker list as the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::marker::{Marker, round_coord};

/// Header line of the `csv` format.
pub const CSV_HEADER: &str = "x,z,type,label";

/// Output format for copied coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// `X Z type`, one marker per line.
    #[default]
    Xz,
    /// `x,z,type,label` with a header line.
    Csv,
    /// Pretty-printed `[{x, z, type, label}]`.
    Json,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Xz, Self::Csv, Self::Json];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xz => "xz",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown export format '{s}' (expected xz, csv or json)"
                ))
            })
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    x: i64,
    z: i64,
    #[serde(rename = "type")]
    kind: &'a str,
    label: &'a str,
}

/// Render markers in the given format.
#[must_use]
pub fn render(markers: &[Marker], format: ExportFormat) -> String {
    if markers.is_empty() {
        return String::new();
    }
    match format {
        ExportFormat::Xz => render_xz(markers),
        ExportFormat::Csv => render_csv(markers),
        ExportFormat::Json => render_json(markers),
    }
}

fn render_xz(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(|m| format!("{} {} {}", round_coord(m.x), round_coord(m.z), m.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(markers: &[Marker]) -> String {
    let mut lines = Vec::with_capacity(markers.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(markers.iter().map(|m| {
        format!(
            "{},{},{},{}",
            round_coord(m.x),
            round_coord(m.z),
            csv_field(m.kind.as_str()),
            csv_quoted(&m.label)
        )
    }));
    lines.join("\n")
}

fn render_json(markers: &[Marker]) -> String {
    let rows: Vec<ExportRow<'_>> = markers
        .iter()
        .map(|m| ExportRow {
            x: round_coord(m.x),
            z: round_coord(m.z),
            kind: m.kind.as_str(),
            label: &m.label,
        })
        .collect();
    // Plain integer and string rows always serialize.
    serde_json::to_string_pretty(&rows).unwrap_or_default()
}

/// Quote a field only when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        csv_quoted(value)
    } else {
        value.to_string()
    }
}

fn csv_quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::StructureType;
    use pretty_assertions::assert_eq;

    fn marker(x: f64, z: f64, kind: StructureType, label: &str) -> Marker {
        Marker {
            x,
            z,
            kind,
            label: label.into(),
            world: "overworld".into(),
            map_layer: "flat".into(),
            zoom_level: 2,
            created_at: 1,
        }
    }

    #[test]
    fn xz_is_space_separated() {
        let markers = [marker(100.4, -50.4, StructureType::Village, "A")];
        assert_eq!(render(&markers, ExportFormat::Xz), "100 -50 village");
    }

    #[test]
    fn csv_quotes_label() {
        let markers = [marker(100.4, -50.4, StructureType::Village, "A")];
        assert_eq!(
            render(&markers, ExportFormat::Csv),
            "x,z,type,label\n100,-50,village,\"A\""
        );
    }

    #[test]
    fn csv_escapes_embedded_quotes_and_delimiters() {
        let markers = [marker(
            0.0,
            0.0,
            StructureType::Custom("tower, tall".into()),
            "the \"big\" one",
        )];
        assert_eq!(
            render(&markers, ExportFormat::Csv),
            "x,z,type,label\n0,0,\"tower, tall\",\"the \"\"big\"\" one\""
        );
    }

    #[test]
    fn json_is_pretty_and_omits_context_fields() {
        let markers = [
            marker(1.6, 2.2, StructureType::Monument, "m"),
            marker(-3.5, 4.0, StructureType::OceanRuin, "o"),
        ];
        let expected = r#"[
  {
    "x": 2,
    "z": 2,
    "type": "monument",
    "label": "m"
  },
  {
    "x": -3,
    "z": 4,
    "type": "ocean_ruin",
    "label": "o"
  }
]"#;
        assert_eq!(render(&markers, ExportFormat::Json), expected);
    }

    #[test]
    fn multiple_markers_are_newline_joined() {
        let markers = [
            marker(1.0, 2.0, StructureType::Village, "a"),
            marker(3.0, 4.0, StructureType::Village, "b"),
        ];
        assert_eq!(render(&markers, ExportFormat::Xz), "1 2 village\n3 4 village");
    }

    #[test]
    fn empty_list_renders_empty_in_every_format() {
        for format in ExportFormat::ALL {
            assert_eq!(render(&[], format), "");
        }
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(err.to_string().contains("unknown export format 'xml'"));
    }
}
