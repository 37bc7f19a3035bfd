use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;

/// Handle `sqm export`. Always prints the export text itself, whatever
/// `--output` says, so the result can be piped straight to a clipboard.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => ctx.config.general.export_format()?,
    };

    let text = ctx.store.export_text(format);
    if text.trim().is_empty() {
        if !flags.quiet {
            eprintln!("nothing to copy");
        }
        return Ok(());
    }
    println!("{text}");
    Ok(())
}
