use sqm_core::responses::StatusResponse;
use sqm_core::status::status_line;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::{coordinates_of, read_location};
use crate::context::AppContext;
use crate::output::emit;

/// Handle `sqm status`.
pub fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let location = read_location(&args.source)?;
    let response = StatusResponse {
        status: status_line(coordinates_of(&location).as_ref()),
        markers: ctx.store.len(),
    };
    emit(&response, flags, || response.status.clone())
}
