use sqm_core::StructureType;
use sqm_core::responses::StructureTypeEntry;
use sqm_core::structure::CUSTOM_SELECTION;

use crate::cli::GlobalFlags;
use crate::output::emit;

/// Handle `sqm types`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = entries();
    emit(&entries, flags, || {
        entries
            .iter()
            .map(|entry| format!("{:<14} {}", entry.name, entry.display_name))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn entries() -> Vec<StructureTypeEntry> {
    StructureType::KNOWN
        .iter()
        .map(|kind| StructureTypeEntry {
            name: kind.as_str().to_string(),
            display_name: kind.display_name().to_string(),
        })
        .chain(std::iter::once(StructureTypeEntry {
            name: CUSTOM_SELECTION.to_string(),
            display_name: String::from("Custom…"),
        }))
        .collect()
}
