use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Short status messages, like the overlay's status tag.
    Text,
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub output: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub storage_dir: Option<String>,
    pub key: Option<String>,
}
