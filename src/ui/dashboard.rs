// StatusBoard - ui/dashboard.rs
//
// Text rendering of the Dashboard page.

use crate::app::pages::{DashboardReport, Distribution, TrendChart};
use crate::core::metrics::{Histogram, MetricBreakdown, MetricSnapshot, TrendSeries};
use crate::ui::table::{render_bars, render_table};
use std::fmt::Write;

pub fn render_dashboard(report: &DashboardReport<'_>) -> String {
    let mut out = String::new();

    out.push_str("== Key Metrics ==\n");
    out.push_str(&render_metrics(&report.metrics));
    out.push('\n');

    match &report.distribution {
        Distribution::Status { column, counts } => {
            let _ = writeln!(out, "== Distribution by {column} ==");
            let items: Vec<(String, usize)> = counts.iter().map(|(v, n)| (v.to_text(), *n)).collect();
            out.push_str(&render_bars(&items));
        }
        Distribution::ColumnKinds(kinds) => {
            out.push_str("== Column Types Distribution ==\n");
            let items: Vec<(String, usize)> = kinds.iter().map(|(k, n)| (k.label().to_string(), *n)).collect();
            out.push_str(&render_bars(&items));
        }
    }
    out.push('\n');

    out.push_str("== Trends Over Time ==\n");
    match &report.chart {
        TrendChart::Series(series) => out.push_str(&render_series(series)),
        TrendChart::Histogram { histogram, candidates } => {
            out.push_str(&render_histogram(histogram));
            if candidates.len() > 1 {
                let _ = writeln!(out, "  (other numeric columns: {})", others(candidates, &histogram.column));
            }
        }
        TrendChart::InvalidColumn { column, candidates } => {
            let _ = writeln!(
                out,
                "'{column}' is not a numeric column. Choose one of: {}",
                candidates.join(", ")
            );
        }
        TrendChart::NoNumericColumns => out.push_str("No numeric columns found for visualization.\n"),
    }
    out.push('\n');

    out.push_str("== Detailed Breakdown ==\n");
    if !report.unmatched_filter_values.is_empty() {
        let _ = writeln!(
            out,
            "Ignored filter values (not present): {}",
            report.unmatched_filter_values.join(", ")
        );
    }
    let _ = writeln!(out, "Filtered Records: {}", report.breakdown.len());
    out.push_str(&render_table(&report.breakdown, None));
    out
}

fn render_metrics(metrics: &MetricSnapshot) -> String {
    let (labels, values): ([&str; 3], [usize; 3]) = match &metrics.breakdown {
        MetricBreakdown::Status {
            completed,
            in_progress,
            pending,
            ..
        } => (["Completed", "In Progress", "Pending"], [*completed, *in_progress, *pending]),
        MetricBreakdown::Generic {
            columns,
            numeric_columns,
            text_columns,
        } => (["Columns", "Numeric Columns", "Text Columns"], [*columns, *numeric_columns, *text_columns]),
    };
    let mut out = format!("  {:<16}{}\n", "Total Records", metrics.total_records);
    for (label, value) in labels.iter().zip(values) {
        let _ = writeln!(out, "  {label:<16}{value}");
    }
    out
}

fn render_series(series: &TrendSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trends by {} ({})", series.status_column, series.date_column);
    if series.points.is_empty() {
        out.push_str("  No parseable dates.\n");
    }
    for (status, points) in series.lines() {
        let _ = writeln!(out, "  {status}");
        let items: Vec<(String, usize)> = points
            .iter()
            .map(|(date, n)| (crate::core::model::CellValue::Date(*date).to_text(), *n))
            .collect();
        for line in render_bars(&items).lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    if series.unparseable > 0 {
        let _ = writeln!(
            out,
            "  ({} rows skipped: '{}' could not be read as a date)",
            series.unparseable, series.date_column
        );
    }
    out
}

fn render_histogram(histogram: &Histogram) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Distribution of {}", histogram.column);
    let items: Vec<(String, usize)> = histogram
        .bins
        .iter()
        .map(|b| (format!("{} - {}", short(b.lower), short(b.upper)), b.count))
        .collect();
    out.push_str(&render_bars(&items));
    if histogram.skipped > 0 {
        let _ = writeln!(out, "  ({} non-numeric values skipped)", histogram.skipped);
    }
    out
}

fn short(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n:.2}")
    }
}

fn others(candidates: &[String], chosen: &str) -> String {
    candidates
        .iter()
        .filter(|c| c.as_str() != chosen)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::{build_dashboard, DashboardRequest};
    use crate::core::sample::{inventory_dataset, project_dataset};
    use crate::platform::config::AppConfig;

    #[test]
    fn test_project_dashboard_text() {
        let ds = project_dataset();
        let report = build_dashboard(&ds, &DashboardRequest::default(), &AppConfig::default());
        let out = render_dashboard(&report);
        assert!(out.contains("Total Records   8"), "{out}");
        assert!(out.contains("In Progress     4"), "{out}");
        assert!(out.contains("== Distribution by Status =="));
        assert!(out.contains("Trends by Status (Start Date)"));
        assert!(out.contains("Filtered Records: 8"));
    }

    #[test]
    fn test_inventory_dashboard_text() {
        let ds = inventory_dataset();
        let report = build_dashboard(&ds, &DashboardRequest::default(), &AppConfig::default());
        let out = render_dashboard(&report);
        assert!(out.contains("Distribution of Quantity in Stock"), "{out}");
        assert!(out.contains("other numeric columns: Reorder Level, Unit Price"));
    }
}
