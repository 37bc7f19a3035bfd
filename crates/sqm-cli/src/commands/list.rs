use sqm_core::Marker;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::emit;

/// Handle `sqm list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let markers = ctx.store.markers();
    emit(&markers, flags, || text_lines(markers))
}

fn text_lines(markers: &[Marker]) -> String {
    if markers.is_empty() {
        return String::from("no markers");
    }
    markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            format!(
                "{}. {} ({} @ {}, {})",
                index + 1,
                marker.label,
                marker.kind,
                marker.rounded_x(),
                marker.rounded_z()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
