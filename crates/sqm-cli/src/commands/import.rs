use std::io::Read;
use std::path::Path;

use anyhow::Context;
use sqm_core::responses::{ImportResponse, RejectedRecord};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::emit;

/// Handle `sqm import`.
pub fn handle(args: &ImportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_payload(args.path.as_deref())?;
    let summary = ctx.store.import_json(&text).context("import failed")?;

    let response = ImportResponse {
        imported: summary.imported,
        rejected: summary
            .rejected
            .into_iter()
            .map(|rejection| RejectedRecord {
                index: rejection.index,
                field: rejection.field.to_string(),
                reason: rejection.reason,
            })
            .collect(),
    };
    emit(&response, flags, || match response.rejected.len() {
        0 => format!("imported {}", response.imported),
        dropped => format!("imported {} (dropped {dropped})", response.imported),
    })
}

fn read_payload(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read import file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read import payload from stdin")?;
            Ok(text)
        }
    }
}
