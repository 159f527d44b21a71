// StatusBoard - core/filter.rs
//
// Composable views over a dataset: category filter, text search and
// column selection. Each operation returns a new View of row/column
// indices into the borrowed dataset; the dataset itself is never touched.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{CellValue, Dataset};
use std::collections::HashSet;

// =============================================================================
// View
// =============================================================================

/// A read-only projection of a dataset.
///
/// Holds indices into the original dataset rather than copies, so chaining
/// filters is cheap and the original row order is always preserved.
#[derive(Debug, Clone)]
pub struct View<'a> {
    dataset: &'a Dataset,
    columns: Vec<usize>,
    rows: Vec<usize>,
}

impl<'a> View<'a> {
    /// Every row and every column of `dataset`.
    pub fn full(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            columns: (0..dataset.columns().len()).collect(),
            rows: (0..dataset.len()).collect(),
        }
    }

    /// The dataset this view projects.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Dataset column indices shown by this view, in display order.
    pub fn column_indices(&self) -> &[usize] {
        &self.columns
    }

    /// Dataset row indices kept by this view, in original order.
    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    /// Names of the displayed columns.
    pub fn column_names(&self) -> Vec<&'a str> {
        let names = self.dataset.columns();
        self.columns.iter().map(|&c| names[c].as_str()).collect()
    }

    /// Number of rows in the view.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Displayed cells of each row, row by row.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<&'a CellValue>> + '_ {
        let dataset = self.dataset;
        self.rows.iter().map(move |&r| {
            self.columns
                .iter()
                .map(|&c| &dataset.rows()[r][c])
                .collect()
        })
    }

    /// Values of one dataset column across the view's rows, whether or not
    /// the column is displayed. None if the dataset has no such column.
    pub fn values_of(&self, column: &str) -> Option<Vec<&'a CellValue>> {
        let col = self.dataset.column_index(column)?;
        let dataset = self.dataset;
        Some(self.rows.iter().map(|&r| &dataset.rows()[r][col]).collect())
    }

    /// Copy the view out into a standalone dataset.
    pub fn to_dataset(&self) -> Dataset {
        let columns = self.column_names().into_iter().map(String::from).collect();
        let rows = self
            .iter_rows()
            .map(|cells| cells.into_iter().cloned().collect())
            .collect();
        Dataset::new(columns, rows)
    }

    fn with_rows(&self, rows: Vec<usize>) -> Self {
        Self {
            dataset: self.dataset,
            columns: self.columns.clone(),
            rows,
        }
    }
}

impl PartialEq for View<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dataset, other.dataset)
            && self.columns == other.columns
            && self.rows == other.rows
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Keep rows whose value in `column` is one of `allowed`.
///
/// Set semantics on the values; row order is preserved. A column that does
/// not exist in the dataset matches no rows.
pub fn filter_by_values<'a>(view: &View<'a>, column: &str, allowed: &[CellValue]) -> View<'a> {
    let Some(col) = view.dataset.column_index(column) else {
        tracing::debug!(column, "Category filter on unknown column");
        return view.with_rows(Vec::new());
    };
    let allowed: HashSet<&CellValue> = allowed.iter().collect();
    let rows = view
        .rows
        .iter()
        .copied()
        .filter(|&r| allowed.contains(&view.dataset.rows()[r][col]))
        .collect();
    view.with_rows(rows)
}

/// Case-insensitive substring search of one term across `columns`.
///
/// A row is kept when ANY of the named columns contains the term. An empty
/// `columns` list searches the view's displayed columns; unknown names are
/// ignored. An empty term returns the view unchanged. Missing cells render
/// as empty text and so only match the empty term.
pub fn search<'a>(view: &View<'a>, columns: &[String], term: &str) -> View<'a> {
    if term.is_empty() {
        return view.clone();
    }
    let targets: Vec<usize> = if columns.is_empty() {
        view.columns.clone()
    } else {
        columns
            .iter()
            .filter_map(|name| view.dataset.column_index(name))
            .collect()
    };
    let needle = term.to_lowercase();
    let rows = view
        .rows
        .iter()
        .copied()
        .filter(|&r| {
            let row = &view.dataset.rows()[r];
            targets
                .iter()
                .any(|&c| row[c].to_text().to_lowercase().contains(&needle))
        })
        .collect();
    view.with_rows(rows)
}

/// Project the view onto `names`, in the given order.
///
/// Unknown names are skipped. A selection that names no existing column
/// (including an empty one) keeps every displayed column.
pub fn select_columns<'a>(view: &View<'a>, names: &[String]) -> View<'a> {
    let columns: Vec<usize> = names
        .iter()
        .filter_map(|name| view.dataset.column_index(name))
        .collect();
    if columns.is_empty() {
        return view.clone();
    }
    View {
        dataset: view.dataset,
        columns,
        rows: view.rows.clone(),
    }
}

/// Every distinct value of a column, in first-appearance order.
///
/// The default selection of a category filter: passing all of them to
/// `filter_by_values` keeps every row.
pub fn distinct_values(dataset: &Dataset, column: &str) -> Vec<CellValue> {
    let Some(col) = dataset.column_index(column) else {
        return Vec::new();
    };
    let mut seen: HashSet<&CellValue> = HashSet::new();
    dataset
        .column_values(col)
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

// =============================================================================
// Filter state
// =============================================================================

/// Complete filter state for one page render. All parts are AND-combined:
/// columns are selected, then the category filter, then the search.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Columns to display (empty = all).
    pub columns: Vec<String>,

    /// Category filter: column name and the values to keep.
    pub category: Option<(String, Vec<CellValue>)>,

    /// Substring search term (case-insensitive). Empty = no search.
    pub search_term: String,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.category.is_none() && self.search_term.is_empty()
    }

    /// Apply every active part to `dataset`.
    ///
    /// Search covers the displayed columns only.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> View<'a> {
        let mut view = View::full(dataset);
        if self.is_empty() {
            return view;
        }
        view = select_columns(&view, &self.columns);
        if let Some((column, allowed)) = &self.category {
            view = filter_by_values(&view, column, allowed);
        }
        search(&view, &[], &self.search_term)
    }
}
