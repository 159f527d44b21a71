// StatusBoard - ui/info.rs
//
// Text rendering for the Upload, Edit and View All Data pages: previews,
// database info, summary statistics and data information.

use crate::app::pages::ViewReport;
use crate::app::state::{ClearOutcome, UploadOutcome};
use crate::core::filter::View;
use crate::core::metrics::{summarize_columns, ColumnSummary};
use crate::core::model::Dataset;
use crate::ui::table::{render_numbered_table, render_table};
use crate::util::constants::PREVIEW_ROWS;
use std::fmt::Write;

const NO_DATA: &str = "No data found. Please upload data first.\n";

/// Record count, column count and column names of the stored dataset.
pub fn render_database_info(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return "No data in database.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Total Records: {}", dataset.len());
    let _ = writeln!(out, "Columns: {}", dataset.columns().len());
    let _ = writeln!(out, "Column Names: {}", dataset.columns().join(", "));
    out
}

/// Result of an upload: size, preview, then the stored dataset's info.
pub fn render_upload(outcome: &UploadOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Loaded {} rows and {} columns",
        outcome.uploaded.len(),
        outcome.uploaded.columns().len()
    );
    out.push_str("\n== Preview ==\n");
    out.push_str(&render_table(&View::full(&outcome.uploaded), Some(PREVIEW_ROWS)));
    out.push('\n');
    if outcome.appended {
        out.push_str("Data appended successfully.\n");
    } else {
        out.push_str("Data saved successfully.\n");
    }
    out.push_str(&render_database_info(&outcome.stored));
    out
}

/// The Edit page grid.
pub fn render_grid(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return NO_DATA.to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Total Records: {}", dataset.len());
    // Row numbers are what `edit set` and `edit delete-row` take.
    out.push_str(&render_numbered_table(&View::full(dataset), None));
    out
}

pub fn render_clear(outcome: ClearOutcome) -> String {
    match outcome {
        ClearOutcome::Armed => {
            "Run `clear` again to confirm deletion (or `clear --cancel`).\n".to_string()
        }
        ClearOutcome::Deleted => "All data deleted!\n".to_string(),
    }
}

/// View All Data: record count, optional match count, the table.
pub fn render_view(report: &ViewReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Records: {}", report.total);
    if !report.unknown_columns.is_empty() {
        let _ = writeln!(out, "Unknown columns ignored: {}", report.unknown_columns.join(", "));
    }
    if let Some(n) = report.matches {
        let _ = writeln!(out, "Found {n} matching records");
    }
    out.push_str(&render_table(&report.view, None));
    out
}

/// Summary statistics for every column.
pub fn render_summary(dataset: &Dataset) -> String {
    let summaries = summarize_columns(dataset);
    let mut out = String::from("== Summary Statistics ==\n");
    for s in &summaries {
        out.push_str(&render_column_summary(s));
    }
    out
}

fn render_column_summary(s: &ColumnSummary) -> String {
    let mut out = format!("{} ({})\n", s.column, s.kind);
    let _ = writeln!(out, "  count   {}", s.count);
    if let (Some(unique), Some((top, freq))) = (s.unique, &s.top) {
        let _ = writeln!(out, "  unique  {unique}");
        let _ = writeln!(out, "  top     {top}");
        let _ = writeln!(out, "  freq    {freq}");
    }
    if let Some(n) = &s.numeric {
        let _ = writeln!(out, "  mean    {:.4}", n.mean);
        match n.std {
            Some(std) => {
                let _ = writeln!(out, "  std     {std:.4}");
            }
            None => out.push_str("  std     -\n"),
        }
        for (label, value) in [("min", n.min), ("25%", n.q25), ("50%", n.median), ("75%", n.q75), ("max", n.max)] {
            let _ = writeln!(out, "  {label:<8}{value}");
        }
    }
    out
}

/// Column kinds and missing-value counts.
pub fn render_data_info(dataset: &Dataset) -> String {
    let summaries = summarize_columns(dataset);
    let mut out = String::from("== Column Names and Types ==\n");
    for s in &summaries {
        let _ = writeln!(out, "- {}: {}", s.column, s.kind);
    }
    out.push_str("\n== Missing Values ==\n");
    let with_missing: Vec<&ColumnSummary> = summaries.iter().filter(|s| s.missing > 0).collect();
    if with_missing.is_empty() {
        out.push_str("No missing values!\n");
    }
    for s in with_missing {
        let _ = writeln!(out, "- {}: {} ({:.1}%)", s.column, s.missing, s.missing_percent());
    }
    out
}

pub fn render_no_data() -> String {
    NO_DATA.to_string()
}
