//! Structure types a marker can be tagged with.
//!
//! The map overlay offers a fixed list of structures plus a free-text
//! escape. Known names serialize in `snake_case`; custom values serialize
//! verbatim, so stored data never needs to know which side of the set a
//! value came from.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type used when an imported record carries no usable type.
pub const DEFAULT_IMPORT_TYPE: &str = "structure";

/// Selector value that switches to free-text entry.
pub const CUSTOM_SELECTION: &str = "custom";

/// A structure type: one of the known set, or a user-supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StructureType {
    Monument,
    Village,
    Outpost,
    Mansion,
    Stronghold,
    Bastion,
    Fortress,
    AncientCity,
    Shipwreck,
    RuinedPortal,
    OceanRuin,
    DesertTemple,
    JungleTemple,
    Custom(String),
}

impl StructureType {
    /// Every known structure, in selector order.
    pub const KNOWN: [Self; 13] = [
        Self::Monument,
        Self::Village,
        Self::Outpost,
        Self::Mansion,
        Self::Stronghold,
        Self::Bastion,
        Self::Fortress,
        Self::AncientCity,
        Self::Shipwreck,
        Self::RuinedPortal,
        Self::OceanRuin,
        Self::DesertTemple,
        Self::JungleTemple,
    ];

    /// Parse a type name. Known names map to their variant; anything else
    /// becomes `Custom`. Blank input reads as [`DEFAULT_IMPORT_TYPE`], so the
    /// result is never empty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Custom(DEFAULT_IMPORT_TYPE.to_string());
        }
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == trimmed)
            .cloned()
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()))
    }

    /// Resolve a selector choice the way the overlay does: the `custom`
    /// entry takes the free-text value, falling back to `custom` itself
    /// when that is blank. A blank selection counts as the `custom` entry.
    #[must_use]
    pub fn from_selection(selected: &str, custom_text: Option<&str>) -> Self {
        let selected = selected.trim();
        if !selected.is_empty() && selected != CUSTOM_SELECTION {
            return Self::parse(selected);
        }
        match custom_text.map(str::trim).filter(|text| !text.is_empty()) {
            Some(text) => Self::parse(text),
            None => Self::Custom(CUSTOM_SELECTION.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Monument => "monument",
            Self::Village => "village",
            Self::Outpost => "outpost",
            Self::Mansion => "mansion",
            Self::Stronghold => "stronghold",
            Self::Bastion => "bastion",
            Self::Fortress => "fortress",
            Self::AncientCity => "ancient_city",
            Self::Shipwreck => "shipwreck",
            Self::RuinedPortal => "ruined_portal",
            Self::OceanRuin => "ocean_ruin",
            Self::DesertTemple => "desert_temple",
            Self::JungleTemple => "jungle_temple",
            Self::Custom(value) => value,
        }
    }

    /// Human-readable name shown in the type selector.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Monument => "Ocean Monument",
            Self::Village => "Village",
            Self::Outpost => "Pillager Outpost",
            Self::Mansion => "Woodland Mansion",
            Self::Stronghold => "Stronghold",
            Self::Bastion => "Bastion Remnant",
            Self::Fortress => "Nether Fortress",
            Self::AncientCity => "Ancient City",
            Self::Shipwreck => "Shipwreck",
            Self::RuinedPortal => "Ruined Portal",
            Self::OceanRuin => "Ocean Ruins",
            Self::DesertTemple => "Desert Temple",
            Self::JungleTemple => "Jungle Temple",
            Self::Custom(value) => value,
        }
    }

    /// The type name with underscores spaced out, as used in default labels.
    #[must_use]
    pub fn spaced(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for StructureType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for StructureType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<StructureType> for String {
    fn from(value: StructureType) -> Self {
        match value {
            StructureType::Custom(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
