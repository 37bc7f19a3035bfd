use std::path::Path;

use anyhow::{Context, bail};
use sqm_core::ParsedCoordinates;
use sqm_core::source::{fragment_of, parse_location};

use crate::cli::root_commands::SourceArgs;

/// Read the current page address from the positional argument or the
/// source file.
pub fn read_location(source: &SourceArgs) -> anyhow::Result<String> {
    match (&source.location, &source.source_file) {
        (Some(location), _) => Ok(location.clone()),
        (None, Some(path)) => read_location_file(path),
        (None, None) => bail!("no location given: pass a fragment or --source-file"),
    }
}

/// Read a page address from a file, trimming the trailing newline.
pub fn read_location_file(path: &Path) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read coordinate source {}", path.display()))?;
    Ok(raw.trim().to_string())
}

/// Parse a page address or fragment into coordinates.
#[must_use]
pub fn coordinates_of(location: &str) -> Option<ParsedCoordinates> {
    parse_location(fragment_of(location.trim()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn positional_location_wins() {
        let args = SourceArgs {
            location: Some("#w;l;1,2,3".into()),
            source_file: None,
        };
        assert_eq!(read_location(&args).unwrap(), "#w;l;1,2,3");
    }

    #[test]
    fn source_file_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://map.example.com/#overworld;flat;5,64,6;2").unwrap();
        let args = SourceArgs {
            location: None,
            source_file: Some(file.path().to_path_buf()),
        };
        let location = read_location(&args).unwrap();
        let coords = coordinates_of(&location).expect("should parse");
        assert_eq!(coords.zoom, 2);
    }

    #[test]
    fn missing_source_is_an_error() {
        let args = SourceArgs {
            location: None,
            source_file: None,
        };
        assert!(read_location(&args).is_err());
    }

    #[test]
    fn address_without_fragment_has_no_coordinates() {
        assert!(coordinates_of("https://map.example.com/").is_none());
    }
}
