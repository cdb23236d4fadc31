use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Reconcile source, target, and ORM schemas and write the audit report.
    Audit(AuditArgs),
    /// Print the JSON Schema of a Concord document type.
    Schema(SchemaArgs),
}

/// Arguments for `concord audit`. Omitted paths fall back to `[inputs]`.
#[derive(Clone, Debug, Default, Args)]
pub struct AuditArgs {
    /// Source schema JSON document
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Target schema JSON document
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// ORM model file
    #[arg(long)]
    pub orm: Option<PathBuf>,

    /// Seed mappings JSON array
    #[arg(long)]
    pub mappings: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `concord schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered document type, e.g. `audit_report`
    #[arg(required_unless_present = "list")]
    pub type_name: Option<String>,

    /// List registered document types
    #[arg(long, conflicts_with = "type_name")]
    pub list: bool,
}
