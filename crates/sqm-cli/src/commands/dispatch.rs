use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Dump => commands::dump::handle(ctx),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Clear(args) => commands::clear::handle(&args, ctx, flags),
        Commands::Status(args) => commands::status::handle(&args, ctx, flags),
        Commands::Watch(args) => commands::watch::handle(&args, ctx, flags).await,
        Commands::Types | Commands::Schema(_) => {
            unreachable!("types/schema are pre-dispatched in main")
        }
    }
}
