//! Aligned plain-text tables for terminal output.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    /// Width from `COLUMNS`, color when stdout is a terminal and `NO_COLOR`
    /// is unset.
    #[must_use]
    pub fn detect() -> Self {
        use std::io::IsTerminal;

        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { max_width, color }
    }
}

const MIN_WIDTH: usize = 6;
const GAP: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns to fit
/// `max_width` and truncating cells with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), width);
                let padded = pad(&cell, width);
                if options.color {
                    colorize_severity(&cell, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Color a padded cell whose content is a severity label.
fn colorize_severity(cell: &str, padded: &str) -> String {
    let code = match cell {
        "error" => "31",
        "warning" => "33",
        "info" => "36",
        _ => return padded.to_string(),
    };
    let fill = &padded[cell.len()..];
    format!("\u{1b}[{code}m{cell}\u{1b}[0m{fill}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["error".to_string(), "orders".to_string()],
            vec!["warning".to_string(), "user_accounts".to_string()],
        ];
        let out = render_table(&["severity", "table"], &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "severity  table");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "error     orders");
        assert_eq!(lines[3], "warning   user_accounts");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "error".to_string(),
            "a message that is far too long to fit in forty columns of output".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let out = render_table(&["severity", "message"], &rows, options);
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["info".to_string()]];
        let out = render_table(&["severity", "column"], &rows, PLAIN);
        assert_eq!(out.lines().last(), Some("info      -"));
    }

    #[test]
    fn severity_cells_are_colored() {
        let rows = vec![vec!["error".to_string(), "x".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let out = render_table(&["severity", "table"], &rows, options);
        assert!(out.contains("\u{1b}[31merror\u{1b}[0m"));
    }
}
