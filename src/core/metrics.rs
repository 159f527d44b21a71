// StatusBoard - core/metrics.rs
//
// Dashboard metrics: status bucket counts, category distributions, trend
// series, histogram fallback and per-column summary statistics.
// Core layer: pure computation over a Dataset or View, no I/O.

use crate::core::filter::View;
use crate::core::model::{CellValue, ColumnKind, Dataset};
use crate::core::roles::{contains_any, to_owned_list};
use crate::util::constants;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Status buckets
// =============================================================================

/// Keyword sets for the three status buckets.
///
/// Buckets are matched independently: one status value may land in several
/// buckets or in none, so the bucket counts need not sum to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusKeywords {
    pub completed: Vec<String>,
    pub in_progress: Vec<String>,
    pub pending: Vec<String>,
}

impl Default for StatusKeywords {
    fn default() -> Self {
        Self {
            completed: to_owned_list(constants::DEFAULT_COMPLETED_KEYWORDS),
            in_progress: to_owned_list(constants::DEFAULT_IN_PROGRESS_KEYWORDS),
            pending: to_owned_list(constants::DEFAULT_PENDING_KEYWORDS),
        }
    }
}

/// The four headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    /// Row count.
    pub total_records: usize,
    /// Status buckets, or generic column counts when there is no status column.
    pub breakdown: MetricBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricBreakdown {
    /// Bucket counts over the status column.
    Status {
        column: String,
        completed: usize,
        in_progress: usize,
        pending: usize,
    },
    /// Fallback when no status column is known.
    Generic {
        columns: usize,
        numeric_columns: usize,
        text_columns: usize,
    },
}

/// Compute the headline metrics.
///
/// `status_column` is normally the inferred status role. If it is None or
/// names a column the dataset lacks, the generic column counts are used.
pub fn compute_metrics(
    dataset: &Dataset,
    status_column: Option<&str>,
    keywords: &StatusKeywords,
) -> MetricSnapshot {
    let total_records = dataset.len();
    let status_idx = status_column.and_then(|name| dataset.column_index(name).map(|i| (name, i)));

    let breakdown = match status_idx {
        Some((name, idx)) => {
            let mut completed = 0;
            let mut in_progress = 0;
            let mut pending = 0;
            for cell in dataset.column_values(idx) {
                if cell.is_missing() {
                    continue;
                }
                let text = cell.to_text();
                if contains_any(&text, &keywords.completed) {
                    completed += 1;
                }
                if contains_any(&text, &keywords.in_progress) {
                    in_progress += 1;
                }
                if contains_any(&text, &keywords.pending) {
                    pending += 1;
                }
            }
            MetricBreakdown::Status {
                column: name.to_string(),
                completed,
                in_progress,
                pending,
            }
        }
        None => {
            let kinds = dataset.column_kinds();
            MetricBreakdown::Generic {
                columns: kinds.len(),
                numeric_columns: kinds.iter().filter(|(_, k)| *k == ColumnKind::Numeric).count(),
                text_columns: kinds.iter().filter(|(_, k)| *k == ColumnKind::Text).count(),
            }
        }
    };

    tracing::debug!(total = total_records, breakdown = ?breakdown, "Metrics computed");
    MetricSnapshot {
        total_records,
        breakdown,
    }
}

// =============================================================================
// Distributions
// =============================================================================

/// Occurrences of each distinct value of `column` within the view.
///
/// Values are kept as-is (no case folding or trimming). Missing cells are
/// not counted. Ordered by descending count; ties keep first-appearance
/// order. An unknown column yields an empty list.
pub fn category_distribution(view: &View<'_>, column: &str) -> Vec<(CellValue, usize)> {
    let Some(values) = view.values_of(column) else {
        return Vec::new();
    };
    let mut order: Vec<&CellValue> = Vec::new();
    let mut counts: HashMap<&CellValue, usize> = HashMap::new();
    for value in values {
        if value.is_missing() {
            continue;
        }
        let n = counts.entry(value).or_insert(0);
        if *n == 0 {
            order.push(value);
        }
        *n += 1;
    }
    let mut out: Vec<(CellValue, usize)> = order
        .into_iter()
        .map(|v| (v.clone(), counts[v]))
        .collect();
    // Stable sort keeps first-appearance order among equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// How many columns fall into each kind, largest group first.
/// Kinds with no columns are omitted.
pub fn column_kind_distribution(dataset: &Dataset) -> Vec<(ColumnKind, usize)> {
    let kinds = dataset.column_kinds();
    let mut out: Vec<(ColumnKind, usize)> = ColumnKind::all()
        .iter()
        .map(|k| (*k, kinds.iter().filter(|(_, kind)| kind == k).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Names of the columns whose every value is numeric, in column order.
///
/// Candidates for the histogram fallback; the caller picks one.
pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
    dataset
        .column_kinds()
        .into_iter()
        .filter(|(_, k)| *k == ColumnKind::Numeric)
        .map(|(name, _)| name)
        .collect()
}

// =============================================================================
// Trend series
// =============================================================================

/// One (date, status) group and its row count.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    pub status: CellValue,
    pub count: usize,
}

/// Row counts grouped by (date, status), ordered by date then status text.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub date_column: String,
    pub status_column: String,
    pub points: Vec<TrendPoint>,
    /// Rows dropped because the date cell could not be parsed.
    pub unparseable: usize,
}

impl TrendSeries {
    /// Points regrouped into one line per status, each line ordered by date.
    /// Lines are ordered by status text.
    pub fn lines(&self) -> Vec<(String, Vec<(NaiveDateTime, usize)>)> {
        let mut lines: BTreeMap<String, Vec<(NaiveDateTime, usize)>> = BTreeMap::new();
        for p in &self.points {
            lines
                .entry(p.status.to_text())
                .or_default()
                .push((p.date, p.count));
        }
        lines.into_iter().collect()
    }
}

/// Group the view's rows by (parsed date, status) and count each group.
///
/// Dates are parsed permissively (see `parse_date`); rows whose date does
/// not parse are excluded and counted in `unparseable`. Rows with a Missing
/// status are excluded. Returns None if either column does not exist.
pub fn trend_series(view: &View<'_>, date_column: &str, status_column: &str) -> Option<TrendSeries> {
    let dates = view.values_of(date_column)?;
    let statuses = view.values_of(status_column)?;

    let mut unparseable = 0;
    let mut groups: BTreeMap<(NaiveDateTime, String), (CellValue, usize)> = BTreeMap::new();
    for (date, status) in dates.into_iter().zip(statuses) {
        let Some(parsed) = parse_date(date) else {
            if !date.is_missing() {
                tracing::debug!(value = %date, column = date_column, "Unparseable date excluded from trend");
            }
            unparseable += 1;
            continue;
        };
        if status.is_missing() {
            continue;
        }
        groups
            .entry((parsed, status.to_text()))
            .or_insert_with(|| (status.clone(), 0))
            .1 += 1;
    }

    let points = groups
        .into_iter()
        .map(|((date, _), (status, count))| TrendPoint {
            date,
            status,
            count,
        })
        .collect();

    Some(TrendSeries {
        date_column: date_column.to_string(),
        status_column: status_column.to_string(),
        points,
        unparseable,
    })
}

/// Best-effort date parsing of a cell.
///
/// Date cells pass through. Text is tried against, in order:
///   1. RFC 3339 (`2026-01-15T09:30:00+01:00`), converted to UTC.
///   2. ISO-like date-times with `-` or `/` separators and ` ` or `T`.
///   3. Date-only forms: ISO, `/`-separated, US `m/d/Y`, dotted `d.m.Y`,
///      and month-name forms (`15 January 2026`, `Jan 15, 2026`, `15-Jan-2026`).
///
/// Numbers and Missing are never dates.
pub fn parse_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_date_text(s),
        CellValue::Number(_) | CellValue::Missing => None,
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d-%b-%Y",
];

fn parse_date_text(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(ndt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(nd) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(nd.and_time(NaiveTime::MIN));
        }
    }
    None
}

// =============================================================================
// Histogram
// =============================================================================

/// One equal-width bucket. `upper` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
    /// Non-missing cells skipped because they are not numbers.
    pub skipped: usize,
}

/// Equal-width histogram of the numeric values of `column` in the view.
///
/// Returns None if the column does not exist or holds no numbers. When all
/// values are equal, or their span is too large to represent, a single bin
/// holds them all. `bins` is clamped to at
/// least one.
pub fn histogram(view: &View<'_>, column: &str, bins: usize) -> Option<Histogram> {
    let values = view.values_of(column)?;
    let mut numbers: Vec<f64> = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for v in values {
        match v.as_f64() {
            Some(n) => numbers.push(n),
            None if v.is_missing() => {}
            None => skipped += 1,
        }
    }
    if numbers.is_empty() {
        return None;
    }

    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // A span that overflows f64 gets one bin as well.
    if min == max || !(max - min).is_finite() {
        return Some(Histogram {
            column: column.to_string(),
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: numbers.len(),
            }],
            skipped,
        });
    }

    let bin_count = bins.max(1);
    let width = (max - min) / bin_count as f64;
    let mut out: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bin_count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for n in numbers {
        let idx = (((n - min) / width) as usize).min(bin_count - 1);
        out[idx].count += 1;
    }

    Some(Histogram {
        column: column.to_string(),
        bins: out,
        skipped,
    })
}

// =============================================================================
// Column summaries
// =============================================================================

/// Descriptive statistics for a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub mean: f64,
    /// Sample standard deviation; None with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Per-column summary: counts, most frequent value, numeric statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub kind: ColumnKind,
    /// Non-missing cells.
    pub count: usize,
    /// Missing cells.
    pub missing: usize,
    /// Distinct non-missing values (non-numeric columns only).
    pub unique: Option<usize>,
    /// Most frequent value and its count (non-numeric columns only).
    pub top: Option<(String, usize)>,
    /// Numeric statistics (numeric columns only).
    pub numeric: Option<NumericSummary>,
}

impl ColumnSummary {
    /// Missing cells as a percentage of all rows.
    pub fn missing_percent(&self) -> f64 {
        let total = self.count + self.missing;
        if total == 0 {
            0.0
        } else {
            self.missing as f64 * 100.0 / total as f64
        }
    }
}

/// Summaries of every column, in column order.
pub fn summarize_columns(dataset: &Dataset) -> Vec<ColumnSummary> {
    let view = View::full(dataset);
    dataset
        .column_kinds()
        .into_iter()
        .map(|(column, kind)| {
            let values = view.values_of(&column).unwrap_or_default();
            let missing = values.iter().filter(|v| v.is_missing()).count();
            let count = values.len() - missing;

            let (unique, top, numeric) = match kind {
                ColumnKind::Numeric => {
                    let mut nums: Vec<f64> = values.iter().filter_map(|v| v.as_f64()).collect();
                    (None, None, numeric_summary(&mut nums))
                }
                ColumnKind::Empty => (None, None, None),
                ColumnKind::Text | ColumnKind::Date => {
                    let dist = category_distribution(&view, &column);
                    let top = dist.first().map(|(v, n)| (v.to_text(), *n));
                    (Some(dist.len()), top, None)
                }
            };

            ColumnSummary {
                column,
                kind,
                count,
                missing,
                unique,
                top,
                numeric,
            }
        })
        .collect()
}

fn numeric_summary(values: &mut [f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(var.sqrt())
    } else {
        None
    };
    Some(NumericSummary {
        mean,
        std,
        min: values[0],
        q25: quantile(values, 0.25),
        median: quantile(values, 0.5),
        q75: quantile(values, 0.75),
        max: values[values.len() - 1],
    })
}

/// Linear-interpolated quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn status_dataset(values: &[&str]) -> Dataset {
        Dataset::new(
            vec!["Status".to_string()],
            values.iter().map(|v| vec![CellValue::parse(v)]).collect(),
        )
    }

    fn buckets(snapshot: &MetricSnapshot) -> (usize, usize, usize) {
        match &snapshot.breakdown {
            MetricBreakdown::Status {
                completed,
                in_progress,
                pending,
                ..
            } => (*completed, *in_progress, *pending),
            other => panic!("expected status breakdown, got {other:?}"),
        }
    }

    #[test]
    fn test_status_buckets_example() {
        let ds = status_dataset(&["Completed", "In Progress", "Pending", "done"]);
        let m = compute_metrics(&ds, Some("Status"), &StatusKeywords::default());
        assert_eq!(m.total_records, 4);
        assert_eq!(buckets(&m), (2, 1, 1));
    }

    #[test]
    fn test_buckets_are_not_exclusive() {
        let ds = status_dataset(&["In Progress and Completed"]);
        let m = compute_metrics(&ds, Some("Status"), &StatusKeywords::default());
        assert_eq!(buckets(&m), (1, 1, 0));
    }

    #[test]
    fn test_unmatched_and_missing_values_count_nowhere() {
        let ds = status_dataset(&["Blocked", "", "On Hold"]);
        let m = compute_metrics(&ds, Some("Status"), &StatusKeywords::default());
        assert_eq!(m.total_records, 3);
        assert_eq!(buckets(&m), (0, 0, 0));
    }

    #[test]
    fn test_bucket_keywords_are_configurable() {
        let ds = status_dataset(&["Shipped", "Queued", "Done"]);
        let kw = StatusKeywords {
            completed: vec!["shipped".to_string()],
            in_progress: Vec::new(),
            pending: vec!["QUEUED".to_string()],
        };
        let m = compute_metrics(&ds, Some("Status"), &kw);
        assert_eq!(buckets(&m), (1, 0, 1));
    }

    #[test]
    fn test_generic_metrics_without_status_column() {
        let ds = Dataset::new(
            vec!["Name".into(), "Qty".into(), "Price".into(), "Restocked".into()],
            vec![vec![text("Mouse"), CellValue::Number(150.0), CellValue::Number(29.99), CellValue::parse("2026-01-15")]],
        );
        let m = compute_metrics(&ds, None, &StatusKeywords::default());
        assert_eq!(
            m.breakdown,
            MetricBreakdown::Generic {
                columns: 4,
                numeric_columns: 2,
                text_columns: 1
            }
        );
    }

    #[test]
    fn test_unknown_status_column_falls_back_to_generic() {
        let ds = status_dataset(&["Done"]);
        let m = compute_metrics(&ds, Some("Stage"), &StatusKeywords::default());
        assert!(matches!(m.breakdown, MetricBreakdown::Generic { columns: 1, .. }));
    }

    #[test]
    fn test_category_distribution_orders_by_count_then_appearance() {
        let ds = status_dataset(&["In Stock", "Low Stock", "In Stock", "Critical", "Low Stock", "In Stock", ""]);
        let dist = category_distribution(&View::full(&ds), "Status");
        assert_eq!(
            dist,
            vec![(text("In Stock"), 3), (text("Low Stock"), 2), (text("Critical"), 1)]
        );
    }

    #[test]
    fn test_category_distribution_keeps_values_as_is() {
        let ds = status_dataset(&["done", "Done", "done "]);
        let dist = category_distribution(&View::full(&ds), "Status");
        assert_eq!(dist.len(), 3);
    }

    #[test]
    fn test_column_kind_distribution() {
        let ds = Dataset::new(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![vec![text("x"), CellValue::Number(1.0), CellValue::Number(2.0), CellValue::Missing]],
        );
        assert_eq!(
            column_kind_distribution(&ds),
            vec![(ColumnKind::Numeric, 2), (ColumnKind::Text, 1), (ColumnKind::Empty, 1)]
        );
        assert_eq!(numeric_columns(&ds), vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap().and_time(NaiveTime::MIN);
        for raw in ["2026-01-15", "2026/01/15", "01/15/2026", "15.01.2026", "15 January 2026", "Jan 15, 2026", "15-Jan-2026"] {
            assert_eq!(parse_date(&text(raw)), Some(expected), "parsing {raw}");
        }
        let with_time = parse_date(&text("2026-01-15T09:30:00")).unwrap();
        assert_eq!(with_time.format("%H:%M").to_string(), "09:30");
        let utc = parse_date(&text("2026-01-15T09:30:00+01:00")).unwrap();
        assert_eq!(utc.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_parse_date_rejects_garbage_and_numbers() {
        assert_eq!(parse_date(&text("soon")), None);
        assert_eq!(parse_date(&text("2026-13-45")), None);
        assert_eq!(parse_date(&CellValue::Number(45000.0)), None);
        assert_eq!(parse_date(&CellValue::Missing), None);
    }

    #[test]
    fn test_trend_series_groups_and_skips_bad_dates() {
        let ds = Dataset::new(
            vec!["Start Date".into(), "Status".into()],
            vec![
                vec![text("2026-01-15"), text("In Progress")],
                vec![text("2026-01-15"), text("In Progress")],
                vec![text("2025-11-01"), text("Completed")],
                vec![text("not a date"), text("Pending")],
                vec![text("2026-01-15"), text("Completed")],
                vec![text("2026-02-01"), CellValue::Missing],
            ],
        );
        let series = trend_series(&View::full(&ds), "Start Date", "Status").unwrap();
        assert_eq!(series.unparseable, 1);
        let summary: Vec<(String, String, usize)> = series
            .points
            .iter()
            .map(|p| (p.date.format("%Y-%m-%d").to_string(), p.status.to_text(), p.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("2025-11-01".to_string(), "Completed".to_string(), 1),
                ("2026-01-15".to_string(), "Completed".to_string(), 1),
                ("2026-01-15".to_string(), "In Progress".to_string(), 2),
            ]
        );

        let lines = series.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "Completed");
        assert_eq!(lines[0].1.len(), 2);
    }

    #[test]
    fn test_trend_series_missing_column_is_none() {
        let ds = status_dataset(&["Done"]);
        assert!(trend_series(&View::full(&ds), "Date", "Status").is_none());
    }

    #[test]
    fn test_histogram_equal_width_bins() {
        let ds = Dataset::new(
            vec!["Qty".into()],
            [0.0, 1.0, 2.0, 5.0, 9.0, 10.0]
                .iter()
                .map(|n| vec![CellValue::Number(*n)])
                .chain(std::iter::once(vec![text("n/a")]))
                .collect(),
        );
        let h = histogram(&View::full(&ds), "Qty", 2).unwrap();
        assert_eq!(h.skipped, 1);
        assert_eq!(h.bins.len(), 2);
        assert_eq!(h.bins[0].count, 3);
        assert_eq!(h.bins[1].count, 3);
        assert_eq!(h.bins[1].upper, 10.0);
    }

    #[test]
    fn test_histogram_single_value_and_no_numbers() {
        let ds = Dataset::new(
            vec!["Qty".into(), "Name".into()],
            vec![vec![CellValue::Number(4.0), text("a")], vec![CellValue::Number(4.0), text("b")]],
        );
        let h = histogram(&View::full(&ds), "Qty", 10).unwrap();
        assert_eq!(h.bins.len(), 1);
        assert_eq!(h.bins[0].count, 2);
        assert!(histogram(&View::full(&ds), "Name", 10).is_none());
        assert!(histogram(&View::full(&ds), "Nope", 10).is_none());
    }

    #[test]
    fn test_histogram_extreme_span_uses_one_bin() {
        let ds = Dataset::new(
            vec!["Value".into()],
            vec![vec![CellValue::Number(f64::MAX)], vec![CellValue::Number(-f64::MAX)], vec![CellValue::Number(0.0)]],
        );
        let h = histogram(&View::full(&ds), "Value", 10).unwrap();
        assert_eq!(h.bins.len(), 1);
        assert_eq!(h.bins[0].count, 3);
        assert_eq!(h.bins[0].lower, -f64::MAX);
        assert_eq!(h.bins[0].upper, f64::MAX);
    }

    #[test]
    fn test_summarize_numeric_column() {
        let ds = Dataset::new(
            vec!["Team Size".into()],
            [5.0, 8.0, 6.0, 10.0].iter().map(|n| vec![CellValue::Number(*n)]).chain(std::iter::once(vec![CellValue::Missing])).collect(),
        );
        let summary = &summarize_columns(&ds)[0];
        assert_eq!(summary.kind, ColumnKind::Numeric);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.missing, 1);
        assert!((summary.missing_percent() - 20.0).abs() < 1e-9);
        let n = summary.numeric.as_ref().unwrap();
        assert_eq!(n.mean, 7.25);
        assert_eq!(n.min, 5.0);
        assert_eq!(n.max, 10.0);
        // sorted [5, 6, 8, 10]: q25 at pos 0.75, median at 1.5, q75 at 2.25
        assert_eq!(n.q25, 5.75);
        assert_eq!(n.median, 7.0);
        assert_eq!(n.q75, 8.5);
        let std = n.std.unwrap();
        assert!((std - 2.217355782608345).abs() < 1e-9, "std = {std}");
    }

    #[test]
    fn test_summarize_text_column() {
        let ds = status_dataset(&["High", "Medium", "High", "Low"]);
        let summary = &summarize_columns(&ds)[0];
        assert_eq!(summary.kind, ColumnKind::Text);
        assert_eq!(summary.unique, Some(3));
        assert_eq!(summary.top, Some(("High".to_string(), 2)));
        assert!(summary.numeric.is_none());
    }
}
