//! Plain-text table output.

use std::fmt::Write;

use datatable_lib::model::TableRow;
use datatable_lib::table::{TableStatus, TableView};
use datatable_lib::DataTable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column separator.
const GAP: &str = "  ";

/// Width reserved for a sort arrow after a header.
const ARROW_WIDTH: usize = 2;

/// Shrink or grow every visible column to fit its header and the cells on the
/// current page, within the column's width bounds.
pub fn fit_columns<T: TableRow>(table: &mut DataTable<T>) {
    let view = table.view();
    let widths: Vec<(String, usize)> = view
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let content = view
                .page_rows
                .iter()
                .map(|row| row.cells[index].width())
                .max()
                .unwrap_or(0);
            let header_width = header.header.width() + ARROW_WIDTH;
            (header.id.clone(), content.max(header_width))
        })
        .collect();

    for (id, width) in widths {
        table.resize_column(&id, u16::try_from(width).unwrap_or(u16::MAX));
    }
}

/// Render the current page as text.
pub fn render<T>(view: &TableView<'_, T>) -> String {
    let mut out = String::new();

    // Header
    let select_all = if view.all_selected {
        "[x]"
    } else if view.some_selected {
        "[-]"
    } else {
        "[ ]"
    };
    let mut line = String::from(select_all);
    let mut rule = String::from("---");
    for header in &view.headers {
        let width = usize::from(header.width);
        let label = match header.aria_sort {
            "ascending" => format!("{} ▲", header.header),
            "descending" => format!("{} ▼", header.header),
            _ => header.header.clone(),
        };
        line.push_str(GAP);
        line.push_str(&fit(&label, width));
        rule.push_str(GAP);
        rule.push_str(&"-".repeat(width));
    }
    push_line(&mut out, &line);
    push_line(&mut out, &rule);

    // Body
    match &view.status {
        TableStatus::Loading => push_line(&mut out, "Loading..."),
        TableStatus::Error(message) => push_line(&mut out, &format!("Error: {}", message)),
        TableStatus::Empty(message) => push_line(&mut out, message),
        TableStatus::Ready => {
            for row in &view.page_rows {
                let mut line = String::from(if row.selected { "[x]" } else { "[ ]" });
                for (cell, header) in row.cells.iter().zip(&view.headers) {
                    line.push_str(GAP);
                    line.push_str(&fit(cell, usize::from(header.width)));
                }
                push_line(&mut out, &line);
            }
        }
    }

    // Footer
    let _ = writeln!(
        out,
        "\nPage {} of {} ({} of {} rows)",
        view.current_page_index + 1,
        view.page_count,
        view.filtered_rows,
        view.total_rows
    );
    if !view.filter_query.is_empty() {
        let _ = writeln!(out, "Filter: {}", view.filter_query);
    }
    if !view.selected_ids.is_empty() {
        let _ = writeln!(out, "Selected: {}", view.selected_ids.join(", "));
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Pad or truncate text to exactly `width` terminal columns.
///
/// Truncated text ends with an ellipsis. Line breaks become spaces.
pub fn fit(text: &str, width: usize) -> String {
    let text = text.replace(['\n', '\r', '\t'], " ");
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}
