use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use sqm_core::ExportFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Record a structure at the position in a location fragment.
    Add(AddArgs),
    /// Replace all markers with a JSON array (file or stdin).
    Import(ImportArgs),
    /// Print markers in a copy format (xz, csv, json).
    Export(ExportArgs),
    /// Print full stored records as JSON.
    Dump,
    /// List markers.
    List,
    /// Delete all markers.
    Clear(ClearArgs),
    /// Show the status line for a location fragment.
    Status(StatusArgs),
    /// Follow a coordinate source file and print status changes.
    Watch(WatchArgs),
    /// List known structure types.
    Types,
    /// Print the JSON schema of a record or response.
    Schema(SchemaArgs),
}

/// Where to read the location fragment from.
#[derive(Clone, Debug, Args)]
pub struct SourceArgs {
    /// Page address or bare `#world;layer;X,Y,Z;zoom` fragment.
    #[arg(conflicts_with = "source_file")]
    pub location: Option<String>,

    /// File whose contents are the current page address or fragment.
    #[arg(long)]
    pub source_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Structure type (known name or `custom`); defaults to general.default_type.
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Free-text type used when `--type custom`.
    #[arg(long)]
    pub custom: Option<String>,

    /// Label; blank means `<type> @ <x>, <z>`.
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// JSON file to import; `-` or nothing reads stdin.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Copy format; defaults to general.default_format.
    #[arg(long)]
    pub format: Option<ExportFormat>,
}

#[derive(Clone, Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// File whose contents are the current page address or fragment.
    #[arg(long)]
    pub source_file: PathBuf,

    /// Poll interval in milliseconds; defaults to general.poll_interval_ms.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many polls.
    #[arg(long)]
    pub count: Option<u64>,
}

/// Types with a printable schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Marker,
    AddResponse,
    ImportResponse,
    ClearResponse,
    StatusResponse,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "marker")]
    pub type_name: SchemaType,
}
