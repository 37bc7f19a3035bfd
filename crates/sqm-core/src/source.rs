//! Coordinate source parsing.
//!
//! The web map keeps its view in the location fragment:
//!
//! ```text
//! #world;mapLayer;X,Y,Z;zoom
//! #overworld;flat;123,64,-450;3
//! ```
//!
//! Parsing never errors. Anything that does not carry a usable position
//! yields `None` and the caller reports it as "no coords".

use serde::{Deserialize, Serialize};

/// Leading character of a location fragment.
pub const FRAGMENT_MARKER: char = '#';

/// Position and view context read from a location fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub world: String,
    pub map_layer: String,
    pub zoom: u32,
}

/// Parse a `#world;mapLayer;X,Y,Z;zoom` fragment.
///
/// Returns `None` when the input is empty, does not start with `#`, has
/// fewer than three `;` fields, has fewer than three `,` components in the
/// position field, or any component is not a finite number.
#[must_use]
pub fn parse_location(fragment: &str) -> Option<ParsedCoordinates> {
    let body = fragment.strip_prefix(FRAGMENT_MARKER)?;
    let parts: Vec<&str> = body.split(';').collect();
    if parts.len() < 3 {
        return None;
    }

    let components: Vec<&str> = parts[2].split(',').collect();
    if components.len() < 3 {
        return None;
    }

    let x = parse_component(components[0])?;
    let y = parse_component(components[1])?;
    let z = parse_component(components[2])?;

    Some(ParsedCoordinates {
        x,
        y,
        z,
        world: parts[0].to_string(),
        map_layer: parts[1].to_string(),
        zoom: parts.get(3).map_or(0, |raw| parse_zoom(raw)),
    })
}

/// Extract the fragment from a full page address. Input without a `#` is
/// returned unchanged, which `parse_location` then rejects.
#[must_use]
pub fn fragment_of(address: &str) -> &str {
    address
        .find(FRAGMENT_MARKER)
        .map_or(address, |index| &address[index..])
}

fn parse_component(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_zoom(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value as u32,
        _ => {
            tracing::debug!(zoom = raw, "ignoring unusable zoom in location fragment");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_well_formed_fragment() {
        let parsed = parse_location("#world;layer;12,64,-34;5").expect("should parse");
        assert_eq!(
            parsed,
            ParsedCoordinates {
                x: 12.0,
                y: 64.0,
                z: -34.0,
                world: "world".into(),
                map_layer: "layer".into(),
                zoom: 5,
            }
        );
    }

    #[test]
    fn zoom_defaults_to_zero_when_absent() {
        let parsed = parse_location("#overworld;flat;1.5,64,-2.25").expect("should parse");
        assert_eq!(parsed.zoom, 0);
        assert!((parsed.x - 1.5).abs() < f64::EPSILON);
        assert!((parsed.z + 2.25).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("#w;l;1,2,3;")]
    #[case("#w;l;1,2,3;abc")]
    #[case("#w;l;1,2,3;-4")]
    fn unusable_zoom_becomes_zero(#[case] input: &str) {
        assert_eq!(parse_location(input).map(|p| p.zoom), Some(0));
    }

    #[test]
    fn fractional_zoom_truncates() {
        assert_eq!(parse_location("#w;l;1,2,3;2.9").map(|p| p.zoom), Some(2));
    }

    #[test]
    fn empty_world_and_layer_are_kept() {
        let parsed = parse_location("#;;0,0,0").expect("should parse");
        assert_eq!(parsed.world, "");
        assert_eq!(parsed.map_layer, "");
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("world;layer;12,64,-34;5")]
    #[case("#world;layer")]
    #[case("#world;layer;12,64")]
    #[case("#world;layer;12,abc,-34;5")]
    #[case("#world;layer;12,,-34;5")]
    #[case("#world;layer;NaN,64,-34")]
    #[case("#world;layer;inf,64,-34")]
    fn rejects_malformed_fragments(#[case] input: &str) {
        assert_eq!(parse_location(input), None);
    }

    #[test]
    fn extra_components_are_ignored() {
        let parsed = parse_location("#w;l;1,2,3,4;1;extra").expect("should parse");
        assert_eq!((parsed.x, parsed.y, parsed.z), (1.0, 2.0, 3.0));
    }

    #[rstest]
    #[case("https://map.example.com/#overworld;flat;1,2,3;4", "#overworld;flat;1,2,3;4")]
    #[case("#nether;flat;1,2,3", "#nether;flat;1,2,3")]
    #[case("no fragment here", "no fragment here")]
    fn extracts_fragment_from_address(#[case] address: &str, #[case] expected: &str) {
        assert_eq!(fragment_of(address), expected);
    }

    #[test]
    fn parsing_is_deterministic() {
        let input = "#overworld;flat;123,64,-450;3";
        assert_eq!(parse_location(input), parse_location(input));
    }
}
