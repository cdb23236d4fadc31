use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `concord` binary.
#[derive(Debug, Parser)]
#[command(
    name = "concord",
    version,
    about = "Concord - source, target, and ORM schema reconciliation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (no stderr summary, errors-only logging)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file layered above project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn audit_paths_parse() {
        let cli = Cli::try_parse_from([
            "concord",
            "audit",
            "--source",
            "s.json",
            "--target",
            "t.json",
            "--orm",
            "schema.prisma",
            "-o",
            "report.json",
        ])
        .expect("cli should parse");

        let Commands::Audit(args) = cli.command else {
            panic!("expected audit");
        };
        assert_eq!(args.source.as_deref(), Some(Path::new("s.json")));
        assert_eq!(args.orm.as_deref(), Some(Path::new("schema.prisma")));
        assert!(args.mappings.is_none());
        assert_eq!(args.output.as_deref(), Some(Path::new("report.json")));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["concord", "--format", "table", "--verbose", "audit"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Audit(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["concord", "audit", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["concord", "--format", "xml", "audit"]).is_err());
    }

    #[test]
    fn schema_requires_name_or_list() {
        assert!(Cli::try_parse_from(["concord", "schema"]).is_err());
        assert!(Cli::try_parse_from(["concord", "schema", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["concord", "schema", "mapping", "--list"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["concord", "--config", "ci.toml", "schema", "--list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("ci.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
