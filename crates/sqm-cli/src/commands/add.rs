use anyhow::bail;
use sqm_core::StructureType;
use sqm_core::structure::CUSTOM_SELECTION;
use sqm_core::responses::AddResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::{coordinates_of, read_location};
use crate::context::AppContext;
use crate::output::emit;

/// Handle `sqm add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let location = read_location(&args.source)?;
    let Some(coords) = coordinates_of(&location) else {
        bail!("no coords in hash: '{location}'");
    };

    let kind = resolve_type(args, ctx);
    let marker = ctx.store.add(kind, &args.label, &coords);
    tracing::debug!(kind = %marker.kind, x = marker.x, z = marker.z, "added marker");

    let response = AddResponse {
        marker,
        total: ctx.store.len(),
    };
    emit(&response, flags, || {
        format!(
            "added {} at {}, {}",
            response.marker.kind,
            response.marker.rounded_x(),
            response.marker.rounded_z()
        )
    })
}

/// `--type` wins; a bare `--custom` implies the custom selection; otherwise
/// the configured default.
fn resolve_type(args: &AddArgs, ctx: &AppContext) -> StructureType {
    match (args.kind.as_deref(), args.custom.as_deref()) {
        (Some(selected), custom) => StructureType::from_selection(selected, custom),
        (None, Some(custom)) => StructureType::from_selection(CUSTOM_SELECTION, Some(custom)),
        (None, None) => ctx.config.general.structure_type(),
    }
}
