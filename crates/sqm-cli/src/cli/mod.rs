use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sqm` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sqm",
    version,
    about = "sqmark - record map structures from location fragments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage directory (overrides storage.dir)
    #[arg(long, global = true)]
    pub storage_dir: Option<String>,

    /// Storage key (overrides storage.key)
    #[arg(long, global = true)]
    pub key: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            output: self.output,
            quiet: self.quiet,
            verbose: self.verbose,
            storage_dir: self.storage_dir.clone(),
            key: self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use sqm_core::ExportFormat;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sqm", "--output", "json", "--verbose", "dump"])
            .expect("cli should parse");

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dump));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sqm", "types", "--output", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.output, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Types));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sqm", "--output", "xml", "dump"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_accepts_location_and_type() {
        let cli = Cli::try_parse_from([
            "sqm",
            "add",
            "#overworld;flat;1,2,3;4",
            "--type",
            "custom",
            "--custom",
            "igloo",
            "--label",
            "snowy",
        ])
        .expect("cli should parse");

        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.source.location.as_deref(), Some("#overworld;flat;1,2,3;4"));
        assert_eq!(args.kind.as_deref(), Some("custom"));
        assert_eq!(args.custom.as_deref(), Some("igloo"));
        assert_eq!(args.label, "snowy");
    }

    #[test]
    fn export_format_parses_through_from_str() {
        let cli = Cli::try_parse_from(["sqm", "export", "--format", "csv"]).expect("cli should parse");
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, Some(ExportFormat::Csv));

        assert!(Cli::try_parse_from(["sqm", "export", "--format", "yaml"]).is_err());
    }

    #[test]
    fn location_and_source_file_conflict() {
        let parsed = Cli::try_parse_from([
            "sqm",
            "status",
            "#w;l;1,2,3",
            "--source-file",
            "/tmp/hash",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["sqm", "--storage-dir", "/tmp/demo", "--key", "k", "dump"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.storage_dir.as_deref(), Some("/tmp/demo"));
        assert_eq!(flags.key.as_deref(), Some("k"));
    }
}
