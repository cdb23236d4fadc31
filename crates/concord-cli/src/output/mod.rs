use concord_core::report::AuditReport;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render an audit report. `json` honours `pretty`; `table` lists the issues.
pub fn render_report(
    report: &AuditReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json | OutputFormat::Raw => Ok(serde_json::to_string(report)?),
        OutputFormat::Table => Ok(issues_table(report, TableOptions::detect())),
    }
}

fn issues_table(report: &AuditReport, options: TableOptions) -> String {
    if report.issues.is_empty() {
        return String::from("(no issues)");
    }
    let headers = ["severity", "component", "table", "column", "message"];
    let rows = report
        .issues
        .iter()
        .map(|issue| {
            vec![
                issue.severity.to_string(),
                issue.component.to_string(),
                issue.table.clone(),
                issue.column.clone().unwrap_or_else(|| String::from("-")),
                issue.message.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows, options)
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let options = TableOptions::detect();
    let rows = match value {
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) => items.iter().map(|item| vec![value_to_cell(item)]).collect(),
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            return Ok(render_table(&["key", "value"], &rows, options));
        }
        scalar => vec![vec![value_to_cell(scalar)]],
    };
    Ok(render_table(&["value"], &rows, options))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use concord_core::enums::Component;
    use concord_core::report::{AuditIssue, AuditReport};

    use super::*;

    fn report() -> AuditReport {
        AuditReport {
            issues: vec![
                AuditIssue::error(Component::Target, "orders", "missing").with_column("total"),
                AuditIssue::warning(Component::Orm, "users", "nullability"),
            ],
            ..AuditReport::default()
        }
    }

    #[test]
    fn json_report_is_pretty_by_default() {
        let out = render_report(&report(), OutputFormat::Json, true).expect("render");
        assert!(out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["issues"][0]["severity"], "error");
    }

    #[test]
    fn compact_report_is_single_line() {
        for format in [OutputFormat::Raw, OutputFormat::Json] {
            let out = render_report(&report(), format, false).expect("render");
            assert!(!out.contains('\n'));
        }
    }

    #[test]
    fn table_report_lists_issues() {
        let out = issues_table(
            &report(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("severity"));
        assert!(lines[2].contains("total"));
        assert!(lines[3].starts_with("warning"));
    }

    #[test]
    fn table_render_for_list_is_tabular() {
        let out = render(&vec!["audit_report", "mapping"], OutputFormat::Table).expect("render");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("value")));
        assert!(out.contains("mapping"));
    }
}
