//! Status text shown while following the map.

use crate::marker::round_coord;
use crate::source::ParsedCoordinates;

/// Shown when the current location carries no coordinates.
pub const IDLE_STATUS: &str = "hash mode";

/// Status line for the current location: `x:<X> z:<Z> (zoom <N>)`, or
/// [`IDLE_STATUS`] when nothing parsed.
#[must_use]
pub fn status_line(coords: Option<&ParsedCoordinates>) -> String {
    coords.map_or_else(
        || IDLE_STATUS.to_string(),
        |c| {
            format!(
                "x:{} z:{} (zoom {})",
                round_coord(c.x),
                round_coord(c.z),
                c.zoom
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_location;

    #[test]
    fn formats_rounded_position_and_zoom() {
        let coords = parse_location("#overworld;flat;123.6,64,-450.2;3");
        assert_eq!(status_line(coords.as_ref()), "x:124 z:-450 (zoom 3)");
    }

    #[test]
    fn idle_when_nothing_parsed() {
        assert_eq!(status_line(None), "hash mode");
    }
}
