use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sqm error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Types => return commands::types::handle(&flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args),
        _ => {}
    }

    let config = sqm_config::SqmConfig::load_with_dotenv().context("failed to load configuration")?;
    let mut ctx = context::AppContext::init(config, &flags)
        .context("failed to initialize sqmark application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SQMARK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
