// StatusBoard - app/pages.rs
//
// Assembles what the Dashboard and View All Data pages show from a loaded
// dataset. Headline metrics and charts cover the whole dataset; the status
// filter only narrows the detailed breakdown table (and what gets exported).

use crate::core::filter::{distinct_values, filter_by_values, FilterState, View};
use crate::core::metrics::{
    category_distribution, column_kind_distribution, compute_metrics, histogram, numeric_columns,
    trend_series, Histogram, MetricSnapshot, TrendSeries,
};
use crate::core::model::{CellValue, ColumnKind, Dataset};
use crate::core::roles::{infer_roles, ColumnRoles};
use crate::platform::config::AppConfig;

// =============================================================================
// Dashboard
// =============================================================================

/// Options the user picked on the Dashboard page.
#[derive(Debug, Clone, Default)]
pub struct DashboardRequest {
    /// Status values to keep in the breakdown table. Empty = all.
    pub only: Vec<String>,
    /// Numeric column for the histogram fallback. None = first candidate.
    pub histogram_column: Option<String>,
}

/// Left-hand chart: status distribution, or column kinds without a status column.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Status {
        column: String,
        counts: Vec<(CellValue, usize)>,
    },
    ColumnKinds(Vec<(ColumnKind, usize)>),
}

/// Right-hand chart.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendChart {
    /// Date and status columns both present.
    Series(TrendSeries),
    /// Fallback over a numeric column; `candidates` lists every numeric column.
    Histogram {
        histogram: Histogram,
        candidates: Vec<String>,
    },
    /// The requested histogram column is not one of the numeric columns.
    InvalidColumn {
        column: String,
        candidates: Vec<String>,
    },
    NoNumericColumns,
}

#[derive(Debug, Clone)]
pub struct DashboardReport<'a> {
    pub roles: ColumnRoles,
    pub metrics: MetricSnapshot,
    pub distribution: Distribution,
    pub chart: TrendChart,
    /// Rows kept by the status filter.
    pub breakdown: View<'a>,
    /// Requested filter values that match no status value.
    pub unmatched_filter_values: Vec<String>,
}

/// Build the dashboard for `dataset`.
pub fn build_dashboard<'a>(dataset: &'a Dataset, request: &DashboardRequest, config: &AppConfig) -> DashboardReport<'a> {
    let roles = infer_roles(dataset.columns(), &config.role_keywords);
    let metrics = compute_metrics(dataset, roles.status.as_deref(), &config.status_keywords);
    let full = View::full(dataset);

    let distribution = match &roles.status {
        Some(column) => Distribution::Status {
            column: column.clone(),
            counts: category_distribution(&full, column),
        },
        None => Distribution::ColumnKinds(column_kind_distribution(dataset)),
    };

    let chart = match (&roles.date, &roles.status) {
        (Some(date), Some(status)) => match trend_series(&full, date, status) {
            Some(series) => TrendChart::Series(series),
            None => histogram_chart(dataset, &full, request, config),
        },
        _ => histogram_chart(dataset, &full, request, config),
    };

    let (breakdown, unmatched_filter_values) = match (&roles.status, request.only.is_empty()) {
        (Some(status), false) => {
            let distinct = distinct_values(dataset, status);
            let allowed: Vec<CellValue> = distinct
                .iter()
                .filter(|v| request.only.contains(&v.to_text()))
                .cloned()
                .collect();
            let unmatched = request
                .only
                .iter()
                .filter(|wanted| !distinct.iter().any(|v| &v.to_text() == *wanted))
                .cloned()
                .collect();
            (filter_by_values(&full, status, &allowed), unmatched)
        }
        (None, false) => (full.clone(), request.only.clone()),
        (_, true) => (full.clone(), Vec::new()),
    };

    tracing::info!(
        rows = dataset.len(),
        filtered = breakdown.len(),
        status = roles.status.as_deref().unwrap_or("-"),
        date = roles.date.as_deref().unwrap_or("-"),
        "Dashboard built"
    );

    DashboardReport {
        roles,
        metrics,
        distribution,
        chart,
        breakdown,
        unmatched_filter_values,
    }
}

fn histogram_chart(dataset: &Dataset, full: &View<'_>, request: &DashboardRequest, config: &AppConfig) -> TrendChart {
    let candidates = numeric_columns(dataset);
    let column = match &request.histogram_column {
        Some(wanted) if !candidates.contains(wanted) => {
            return TrendChart::InvalidColumn {
                column: wanted.clone(),
                candidates,
            }
        }
        Some(wanted) => wanted.clone(),
        None => match candidates.first() {
            Some(first) => first.clone(),
            None => return TrendChart::NoNumericColumns,
        },
    };
    match histogram(full, &column, config.histogram_bins) {
        Some(histogram) => TrendChart::Histogram {
            histogram,
            candidates,
        },
        None => TrendChart::NoNumericColumns,
    }
}

// =============================================================================
// View All Data
// =============================================================================

/// Options the user picked on the View All Data page.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    /// Columns to show, in order. Empty = all.
    pub columns: Vec<String>,
    /// Search term over the shown columns. Empty = no search.
    pub search: String,
}

#[derive(Debug, Clone)]
pub struct ViewReport<'a> {
    pub total: usize,
    pub view: View<'a>,
    /// Match count, present when a search was run.
    pub matches: Option<usize>,
    /// Requested columns that do not exist.
    pub unknown_columns: Vec<String>,
}

/// Select columns, then search across the selected columns.
pub fn build_view<'a>(dataset: &'a Dataset, request: &ViewRequest) -> ViewReport<'a> {
    let unknown_columns = request
        .columns
        .iter()
        .filter(|c| dataset.column_index(c).is_none())
        .cloned()
        .collect();

    let filters = FilterState {
        columns: request.columns.clone(),
        category: None,
        search_term: request.search.clone(),
    };
    let view = filters.apply(dataset);
    let matches = (!request.search.is_empty()).then_some(view.len());

    ViewReport {
        total: dataset.len(),
        view,
        matches,
        unknown_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::MetricBreakdown;
    use crate::core::sample::{inventory_dataset, project_dataset};

    #[test]
    fn test_project_dashboard_uses_status_and_trend() {
        let ds = project_dataset();
        let report = build_dashboard(&ds, &DashboardRequest::default(), &AppConfig::default());
        assert_eq!(report.roles.status.as_deref(), Some("Status"));
        assert_eq!(report.roles.date.as_deref(), Some("Start Date"));
        assert!(matches!(
            report.metrics.breakdown,
            MetricBreakdown::Status {
                completed: 2,
                in_progress: 4,
                pending: 2,
                ..
            }
        ));
        match &report.chart {
            TrendChart::Series(series) => {
                assert_eq!(series.unparseable, 0);
                assert_eq!(series.points.iter().map(|p| p.count).sum::<usize>(), 8);
            }
            other => panic!("expected a trend series, got {other:?}"),
        }
        assert_eq!(report.breakdown.len(), 8);
    }

    #[test]
    fn test_status_filter_narrows_breakdown_only() {
        let ds = project_dataset();
        let request = DashboardRequest {
            only: vec!["Pending".into(), "On Hold".into()],
            histogram_column: None,
        };
        let report = build_dashboard(&ds, &request, &AppConfig::default());
        assert_eq!(report.breakdown.row_indices(), &[3, 6]);
        assert_eq!(report.metrics.total_records, 8);
        assert_eq!(report.unmatched_filter_values, vec!["On Hold".to_string()]);
    }

    #[test]
    fn test_inventory_dashboard_falls_back_to_histogram() {
        let ds = inventory_dataset();
        let report = build_dashboard(&ds, &DashboardRequest::default(), &AppConfig::default());
        assert_eq!(report.roles.status.as_deref(), Some("Stock Status"));
        assert_eq!(report.roles.date, None);
        assert!(matches!(
            report.metrics.breakdown,
            MetricBreakdown::Status {
                completed: 0,
                in_progress: 0,
                pending: 0,
                ..
            }
        ));
        match &report.chart {
            TrendChart::Histogram { histogram, candidates } => {
                assert_eq!(histogram.column, "Quantity in Stock");
                assert_eq!(candidates.len(), 3);
                assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<usize>(), 10);
            }
            other => panic!("expected a histogram, got {other:?}"),
        }
    }

    #[test]
    fn test_histogram_column_choice() {
        let ds = inventory_dataset();
        let pick = |col: &str| {
            let request = DashboardRequest {
                only: Vec::new(),
                histogram_column: Some(col.to_string()),
            };
            build_dashboard(&ds, &request, &AppConfig::default()).chart
        };
        assert!(matches!(pick("Unit Price"), TrendChart::Histogram { .. }));
        assert!(matches!(pick("Supplier"), TrendChart::InvalidColumn { .. }));
    }

    #[test]
    fn test_no_status_column_shows_column_kinds() {
        let ds = Dataset::new(
            vec!["Name".into(), "Owner".into()],
            vec![vec![CellValue::from("a"), CellValue::from("b")]],
        );
        let report = build_dashboard(&ds, &DashboardRequest::default(), &AppConfig::default());
        assert_eq!(report.distribution, Distribution::ColumnKinds(vec![(ColumnKind::Text, 2)]));
        assert_eq!(report.chart, TrendChart::NoNumericColumns);
    }

    #[test]
    fn test_view_selects_then_searches() {
        let ds = project_dataset();
        let request = ViewRequest {
            columns: vec!["Project Name".into(), "Owner".into(), "Budget".into()],
            search: "chen".into(),
        };
        let report = build_view(&ds, &request);
        assert_eq!(report.total, 8);
        assert_eq!(report.matches, Some(1));
        assert_eq!(report.view.column_names(), vec!["Project Name", "Owner"]);
        assert_eq!(report.unknown_columns, vec!["Budget".to_string()]);
    }

    #[test]
    fn test_view_search_ignores_hidden_columns() {
        let ds = project_dataset();
        let request = ViewRequest {
            columns: vec!["Owner".into()],
            search: "PRJ".into(),
        };
        assert_eq!(build_view(&ds, &request).matches, Some(0));
    }

    #[test]
    fn test_view_with_only_unknown_columns_shows_everything() {
        let ds = project_dataset();
        let request = ViewRequest {
            columns: vec!["Budget".into()],
            search: "chen".into(),
        };
        let report = build_view(&ds, &request);
        assert_eq!(report.view.column_names().len(), 10);
        assert_eq!(report.matches, Some(1));
        assert_eq!(report.unknown_columns, vec!["Budget".to_string()]);
    }
}
