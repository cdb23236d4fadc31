//! `concord audit`: load inputs, reconcile, validate, and write the report.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use concord_config::ConcordConfig;
use concord_core::report::AuditReport;
use concord_engine::InputPaths;
use concord_schema::SchemaRegistry;

use crate::cli::root_commands::AuditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Exit status when the report contains at least one error issue.
pub const EXIT_AUDIT_ERRORS: u8 = 2;

/// Handle `concord audit`. Returns the process exit code.
pub fn handle(args: &AuditArgs, flags: &GlobalFlags, config: &ConcordConfig) -> anyhow::Result<u8> {
    let paths = resolve_paths(args, config);
    let inputs = concord_engine::load_inputs(&paths).context("failed to load audit inputs")?;
    let report = concord_engine::audit(&inputs);

    SchemaRegistry::new()
        .validate("audit_report", &serde_json::to_value(&report)?)
        .context("produced report does not match the audit_report schema")?;

    let destination = args
        .output
        .clone()
        .or_else(|| config.inputs.output.as_ref().map(PathBuf::from));
    match destination {
        Some(path) => {
            let format = if flags.format == OutputFormat::Table {
                OutputFormat::Json
            } else {
                flags.format
            };
            let rendered = output::render_report(&report, format, config.report.pretty)?;
            std::fs::write(&path, rendered + "\n")
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            println!(
                "{}",
                output::render_report(&report, flags.format, config.report.pretty)?
            );
        }
    }

    if !flags.quiet {
        eprint!("{}", summary(&report, config.report.preview_issues));
    }

    Ok(exit_code(&report))
}

/// Command-line paths win over `[inputs]`.
fn resolve_paths(args: &AuditArgs, config: &ConcordConfig) -> InputPaths {
    let pick = |flag: Option<&PathBuf>, configured: Option<&str>| {
        flag.cloned().or_else(|| configured.map(PathBuf::from))
    };
    let inputs = &config.inputs;
    InputPaths {
        source: pick(args.source.as_ref(), inputs.source.as_deref()),
        target: pick(args.target.as_ref(), inputs.target.as_deref()),
        orm: pick(args.orm.as_ref(), inputs.orm.as_deref()),
        mappings: pick(args.mappings.as_ref(), inputs.mappings.as_deref()),
    }
}

/// 0 when the report has no error issue, [`EXIT_AUDIT_ERRORS`] otherwise.
#[must_use]
pub fn exit_code(report: &AuditReport) -> u8 {
    if report.has_errors() { EXIT_AUDIT_ERRORS } else { 0 }
}

/// Human summary: top-line counts followed by the first `preview` issues.
#[must_use]
pub fn summary(report: &AuditReport, preview: usize) -> String {
    let s = &report.summary;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "audit: {} tables, {} columns, {} errors, {} warnings",
        s.total_tables,
        s.total_columns,
        report.error_count(),
        report.warning_count()
    );
    let _ = writeln!(
        out,
        "mappings: {} success / {} warning / {} error",
        s.successful_mappings, s.warning_mappings, s.error_mappings
    );
    let _ = writeln!(
        out,
        "missing tables: {}, missing columns: {}, type mismatches: {}",
        s.missing_tables, s.missing_columns, s.type_mismatches
    );
    for issue in report.issues.iter().take(preview) {
        let _ = writeln!(
            out,
            "  [{}] {} {}: {}",
            issue.severity,
            issue.component,
            issue.location(),
            issue.message
        );
    }
    if report.issues.len() > preview {
        let _ = writeln!(out, "  ... and {} more", report.issues.len() - preview);
    }
    out
}
