#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned table for string rows.
///
/// Numeric-looking cells are right-aligned. With `color` set, report notes
/// are wrapped in ANSI colour codes without disturbing alignment.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(header_line.trim_end()));

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    let numeric = looks_numeric(value);
                    let colored = if options.color {
                        colorize_note(value)
                    } else {
                        value.to_string()
                    };
                    format_cell(&colored, *width, numeric)
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shorten `value` to `width` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_text(value: &str, width: usize) -> String {
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
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn display_width(value: &str) -> usize {
    strip_ansi(value).chars().count()
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(display_width(value));
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

fn colorize_note(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let code = if lower.ends_with(": pass") {
        Some("32")
    } else if lower.ends_with(": pending") {
        Some("33")
    } else if lower.contains("reappear") {
        Some("31")
    } else {
        None
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

/// Remove ANSI SGR sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}
