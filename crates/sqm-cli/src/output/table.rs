#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows. Cells in a column named `type`
/// are colored by the dimension the structure generates in.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let cell = format_cell(&truncated, *width, numeric);
                if options.color && headers.get(index) == Some(&"type") {
                    colorize_type(&cell, value)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Nether structures red, ocean structures cyan, everything else unchanged.
fn colorize_type(cell: &str, kind: &str) -> String {
    let code = match kind {
        "bastion" | "fortress" => Some("31"),
        "monument" | "shipwreck" | "ocean_ruin" => Some("36"),
        "stronghold" | "ancient_city" => Some("35"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["12".into(), "-34".into(), "village".into(), "home".into()],
            vec![
                "-1200".into(),
                "88".into(),
                "ancient_city".into(),
                "deep dark under the mountain".into(),
            ],
        ]
    }

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let table = render_table(
            &["x", "z", "type", "label"],
            &rows(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("x    "));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("   12"));
        assert!(lines[3].starts_with("-1200"));
    }

    #[test]
    fn narrows_widest_column_to_fit() {
        let table = render_table(
            &["x", "z", "type", "label"],
            &rows(),
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_only_type_column() {
        let table = render_table(
            &["x", "z", "type", "label"],
            &[vec!["1".into(), "2".into(), "fortress".into(), "fortress".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert_eq!(table.matches("\u{1b}[31m").count(), 1);
    }
}
