// StatusBoard - ui/table.rs
//
// Plain-text table and bar rendering shared by every page.

use crate::core::filter::View;
use crate::util::constants::{CHART_BAR_WIDTH, MAX_CELL_WIDTH};
use std::fmt::Write;

/// Render `view` as an aligned text table with a header rule.
///
/// At most `limit` rows are shown (None = all); a trailing line reports how
/// many were left out. Cells wider than `MAX_CELL_WIDTH` are cut with an
/// ellipsis. Missing cells are blank.
pub fn render_table(view: &View<'_>, limit: Option<usize>) -> String {
    render(view, limit, false)
}

/// Like `render_table`, with a leading `#` column holding each row's index
/// in the dataset.
pub fn render_numbered_table(view: &View<'_>, limit: Option<usize>) -> String {
    render(view, limit, true)
}

fn render(view: &View<'_>, limit: Option<usize>, numbered: bool) -> String {
    let mut header: Vec<String> = view.column_names().into_iter().map(clip).collect();
    if header.is_empty() {
        return "(no columns)\n".to_string();
    }
    if numbered {
        header.insert(0, "#".to_string());
    }

    let shown = limit.unwrap_or(view.len()).min(view.len());
    let body: Vec<Vec<String>> = view
        .iter_rows()
        .zip(view.row_indices())
        .take(shown)
        .map(|(cells, index)| {
            let number = numbered.then(|| index.to_string());
            number
                .into_iter()
                .chain(cells.into_iter().map(|c| clip(&c.to_text())))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &body {
        push_row(&mut out, row, &widths);
    }

    if body.is_empty() {
        out.push_str("(no rows)\n");
    } else if shown < view.len() {
        let _ = writeln!(out, "... {} more rows", view.len() - shown);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}", w = *w))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

fn clip(text: &str) -> String {
    let text = text.replace(['\n', '\r'], " ");
    if text.chars().count() <= MAX_CELL_WIDTH {
        text
    } else {
        let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
        cut.push('…');
        cut
    }
}

/// A horizontal bar scaled so `max` fills `CHART_BAR_WIDTH` characters.
/// Non-zero counts always get at least one character.
pub fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = (count * CHART_BAR_WIDTH).div_ceil(max).clamp(1, CHART_BAR_WIDTH);
    "█".repeat(len)
}

/// Label/count/bar lines, labels padded to a common width.
pub fn render_bars(items: &[(String, usize)]) -> String {
    let max = items.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let label_width = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let count_width = max.to_string().len();
    let mut out = String::new();
    for (label, n) in items {
        let _ = writeln!(
            out,
            "  {label:<label_width$}  {n:>count_width$}  {}",
            bar(*n, max)
        );
    }
    out
}
